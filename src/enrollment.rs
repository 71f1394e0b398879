//! Team auto-enrollment
//!
//! Walks a user's team memberships page by page and adds the user to the
//! configured team when no membership for it was seen. Every failure here
//! is logged through the host and swallowed: login and sign-up must never
//! fail because enrollment did.

use std::collections::HashSet;

use crate::context::HookContext;
use crate::host::PluginApi;
use crate::types::Team;

/// Page size used when listing a user's memberships
pub const MEMBERSHIP_PAGE_SIZE: usize = 100;

/// What an enrollment attempt ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnrollmentOutcome {
    /// No team configured
    Disabled,
    /// Empty user ID, nothing to do
    Skipped,
    /// The user already had a membership in the team
    AlreadyMember,
    /// A membership was created
    Added,
    /// The host refused or failed to create the membership
    AddFailed,
}

/// Collect the team IDs of every membership the host reports for `user_id`
///
/// Stops at the first page shorter than [`MEMBERSHIP_PAGE_SIZE`]. A host
/// error also stops the walk; whatever was collected before it is returned.
/// Log records carry the request ID of `ctx` when it has one.
pub async fn collect_team_ids(api: &dyn PluginApi, user_id: &str, ctx: &HookContext) -> HashSet<String> {
    let mut team_ids = HashSet::new();
    let mut page = 0;

    loop {
        let members = match api
            .get_team_members_for_user(user_id, page, MEMBERSHIP_PAGE_SIZE)
            .await
        {
            Ok(members) => members,
            Err(e) => {
                let page = page.to_string();
                let error = e.to_string();
                api.log_error(
                    "Failed to get team members for user",
                    &with_request_id(
                        ctx,
                        vec![("user_id", user_id), ("page", page.as_str()), ("error", error.as_str())],
                    ),
                );
                break;
            }
        };

        let count = members.len();
        team_ids.extend(members.into_iter().map(|m| m.team_id));

        if count < MEMBERSHIP_PAGE_SIZE {
            break;
        }
        page += 1;
    }

    team_ids
}

/// Make sure `user_id` is a member of `team`
///
/// `team` is the resolved team from the caller's configuration snapshot;
/// `None` means auto-join is disabled and no host call is made.
pub async fn ensure_user_in_team(
    api: &dyn PluginApi,
    team: Option<&Team>,
    user_id: &str,
    ctx: &HookContext,
) -> EnrollmentOutcome {
    let Some(team) = team else {
        return EnrollmentOutcome::Disabled;
    };

    if user_id.is_empty() {
        api.log_warn(
            "Skipping team enrollment for empty user id",
            &with_request_id(ctx, vec![("team_id", team.id.as_str())]),
        );
        return EnrollmentOutcome::Skipped;
    }

    let team_ids = collect_team_ids(api, user_id, ctx).await;
    if team_ids.contains(&team.id) {
        return EnrollmentOutcome::AlreadyMember;
    }

    match api.create_team_member(&team.id, user_id).await {
        Ok(_) => {
            api.log_debug(
                "Added user to team",
                &with_request_id(ctx, vec![("user_id", user_id), ("team_id", team.id.as_str())]),
            );
            EnrollmentOutcome::Added
        }
        Err(e) => {
            let error = e.to_string();
            api.log_error(
                "Failed to add user to team",
                &with_request_id(
                    ctx,
                    vec![("user_id", user_id), ("team_id", team.id.as_str()), ("error", error.as_str())],
                ),
            );
            EnrollmentOutcome::AddFailed
        }
    }
}

fn with_request_id<'a>(ctx: &'a HookContext, mut fields: Vec<(&'a str, &'a str)>) -> Vec<(&'a str, &'a str)> {
    if !ctx.request_id.is_empty() {
        fields.push(("request_id", ctx.request_id.as_str()));
    }
    fields
}

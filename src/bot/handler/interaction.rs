use serenity::all::{CommandDataOptionValue, Context, Interaction, Member, User};

use crate::bot::dispatcher::CommandDispatcher;
use crate::bot::platform::DiscordPlatform;
use crate::bot::response::{PendingResponse, SerenityResponder};
use crate::model::{
    command::{CommandInvocation, OptionValue},
    principal::Principal,
};
use crate::state::AppState;

/// Handles interaction_create events, dispatching slash commands.
///
/// Other interaction kinds (components, autocomplete, modals) are ignored.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    let principal = principal(&command.user, command.member.as_deref());
    let invocation = command
        .data
        .options
        .iter()
        .fold(
            CommandInvocation::new(&command.data.name, principal),
            |invocation, option| match option_value(&option.value) {
                Some(value) => invocation.with_option(&option.name, value),
                None => invocation,
            },
        );

    let platform = DiscordPlatform::new(ctx.clone());
    let response = PendingResponse::new(SerenityResponder::new(ctx, command));

    CommandDispatcher::new(state, &platform)
        .handle(invocation, response)
        .await;
}

/// Builds the caller principal. Outside a guild the caller holds no roles.
pub fn principal(user: &User, member: Option<&Member>) -> Principal {
    let role_ids = member
        .map(|member| member.roles.iter().map(|role| role.get()).collect::<Vec<_>>())
        .unwrap_or_default();

    Principal::new(user.id.get(), user.tag(), role_ids)
}

fn option_value(value: &CommandDataOptionValue) -> Option<OptionValue> {
    match value {
        CommandDataOptionValue::String(value) => Some(OptionValue::String(value.clone())),
        CommandDataOptionValue::Integer(value) => Some(OptionValue::Integer(*value)),
        CommandDataOptionValue::Boolean(value) => Some(OptionValue::Boolean(*value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use test_utils::serenity::{create_test_member, create_test_user};

    use super::*;

    /// Tests that the principal carries the member's roles.
    ///
    /// Expected: both role ids present
    #[test]
    fn principal_collects_member_roles() {
        let member = create_test_member(42, "ana", 7, &[300, 301]);

        let principal = principal(&member.user, Some(&member));

        assert_eq!(principal.user_id, 42);
        assert_eq!(principal.role_ids, HashSet::from([300, 301]));
    }

    #[test]
    fn principal_outside_guild_has_no_roles() {
        let user = create_test_user(42, "ana");

        let principal = principal(&user, None);

        assert!(principal.role_ids.is_empty());
    }

    #[test]
    fn converts_supported_option_values() {
        assert_eq!(
            option_value(&CommandDataOptionValue::String("idle".to_string())),
            Some(OptionValue::String("idle".to_string()))
        );
        assert_eq!(
            option_value(&CommandDataOptionValue::Integer(3)),
            Some(OptionValue::Integer(3))
        );
        assert_eq!(
            option_value(&CommandDataOptionValue::Number(1.5)),
            None
        );
    }
}

//! Placeholder substitution for configured message templates.
//!
//! Templates use `{name}` placeholders (`{username}`, `{server.name}`, ...). Rendering is
//! a single left-to-right pass: every occurrence of a known placeholder is replaced,
//! unknown placeholders are kept verbatim, and substituted values are never scanned
//! again, so a username like `{bot_name}` is printed literally.

/// Renders `template`, replacing each `{key}` found in `values`.
///
/// # Arguments
/// - `template` - Template text containing `{key}` placeholders
/// - `values` - Placeholder keys (without braces) and their replacement text
///
/// # Returns
/// - `String` - The rendered text
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            output.push_str(&rest[open..]);
            return output;
        };

        let key = &after_open[..close];
        if key.contains('{') {
            // The brace is literal; a placeholder may start at a later one
            output.push('{');
            rest = after_open;
            continue;
        }

        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => output.push_str(value),
            None => {
                output.push('{');
                output.push_str(key);
                output.push('}');
            }
        }

        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_placeholders() {
        let rendered = render(
            "Welcome {user} to {server.name}!",
            &[("user", "<@1>"), ("server.name", "The Den")],
        );

        assert_eq!(rendered, "Welcome <@1> to The Den!");
    }

    #[test]
    fn replaces_every_occurrence() {
        let rendered = render("{username} {username}", &[("username", "ana")]);

        assert_eq!(rendered, "ana ana");
    }

    #[test]
    fn keeps_unknown_placeholders() {
        let rendered = render("{eye_emoji} hi {nope}", &[("eye_emoji", ":eye:")]);

        assert_eq!(rendered, ":eye: hi {nope}");
    }

    /// Substituted values must not be expanded a second time.
    #[test]
    fn does_not_rescan_substituted_values() {
        let rendered = render(
            "{username} joined {server.name}",
            &[("username", "{server.name}"), ("server.name", "Guild")],
        );

        assert_eq!(rendered, "{server.name} joined Guild");
    }

    /// Tests placeholders preceded by a stray opening brace.
    ///
    /// Expected: the stray brace is kept and the placeholder still replaced
    #[test]
    fn replaces_placeholder_after_stray_brace() {
        assert_eq!(render("Hi :{ {username}", &[("username", "ana")]), "Hi :{ ana");
        assert_eq!(render("{{username}}", &[("username", "ana")]), "{ana}");
    }

    #[test]
    fn tolerates_unclosed_braces() {
        let rendered = render("hello {username", &[("username", "ana")]);

        assert_eq!(rendered, "hello {username");
    }
}

use std::fmt;
use std::io::{self, Write};

use crate::domain::{LayerKey, ProtocolLayerDescriptor, ProtocolStack};

const RULE_WIDTH: usize = 50;
const TITLE: &str = "HumoticaOS Protocol Stack";
const CLOSING: [&str; 3] = [
    "Intent = Access. No intent = No access.",
    "",
    "One love, one fAmIly!",
];

/// Human-readable rendering of a [`ProtocolStack`].
///
/// Presentation only. Use [`crate::application::StackSnapshot`] for anything a
/// program needs to parse.
#[derive(Debug, Clone, Copy)]
pub struct StackReport<'a> {
    stack: &'a ProtocolStack,
}

/// Describe `stack` as a report whose lines can be iterated any number of times.
pub fn describe_stack(stack: &ProtocolStack) -> StackReport<'_> {
    StackReport { stack }
}

impl<'a> StackReport<'a> {
    /// Lines of the report, without trailing newlines.
    pub fn lines(&self) -> impl Iterator<Item = String> + 'a {
        let banner = [rule(), TITLE.to_string(), rule(), String::new()];
        let layers = self
            .stack
            .iter()
            .flat_map(|(key, layer)| layer_lines(key, layer));
        let closing = CLOSING
            .into_iter()
            .map(str::to_string)
            .chain(std::iter::once(rule()));
        banner.into_iter().chain(layers).chain(closing)
    }

    /// Write every line, newline-terminated, to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(writer, "{line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for StackReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for StackReport<'a> {
    type Item = String;
    type IntoIter = Box<dyn Iterator<Item = String> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.lines())
    }
}

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn layer_lines(key: LayerKey, layer: &ProtocolLayerDescriptor) -> [String; 4] {
    [
        format!("[{}] {} v{}", key.label(), layer.name, layer.version),
        format!("  Components: {}", layer.components.join(", ")),
        format!("  Docs: {}", layer.docs_url),
        String::new(),
    ]
}

/// Write the report for `stack` to `writer`.
pub fn write_report<W: Write>(stack: &ProtocolStack, writer: &mut W) -> io::Result<()> {
    describe_stack(stack).write_to(writer)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::PROTOCOL_STACK;

    const EXPECTED: &str = "\
==================================================
HumoticaOS Protocol Stack
==================================================

[NETWORK] AInternet v0.2.1
  Components: AINS, I-Poll
  Docs: https://github.com/jaspertvdm/ainternet

[SECURITY] JIS v1.0
  Components: HID/DID, FIR/A, IO/DO/OD, SCS
  Docs: https://github.com/jaspertvdm/JTel-identity-standard

[AUDIT] TIBET v1.0.2
  Components: Intent Tokens, Evidence Trail
  Docs: https://pypi.org/project/mcp-server-tibet/

Intent = Access. No intent = No access.

One love, one fAmIly!
==================================================
";

    #[test]
    fn test_report_matches_compat_format() {
        assert_eq!(describe_stack(&PROTOCOL_STACK).to_string(), EXPECTED);
    }

    #[test]
    fn test_report_is_restartable() {
        let report = describe_stack(&PROTOCOL_STACK);
        let first: Vec<String> = report.lines().collect();
        let second: Vec<String> = report.lines().collect();
        assert_eq!(first, second);

        let mut a = Vec::new();
        let mut b = Vec::new();
        write_report(&PROTOCOL_STACK, &mut a).unwrap();
        write_report(&PROTOCOL_STACK, &mut b).unwrap();
        assert_eq!(a, b);
        assert_eq!(String::from_utf8(a).unwrap(), EXPECTED);
    }

    #[test]
    fn test_layers_appear_in_order() {
        let lines: Vec<String> = describe_stack(&PROTOCOL_STACK).into_iter().collect();
        let position = |needle: &str| lines.iter().position(|l| l == needle).unwrap();

        let network = position("[NETWORK] AInternet v0.2.1");
        let security = position("[SECURITY] JIS v1.0");
        let audit = position("[AUDIT] TIBET v1.0.2");
        assert!(network < security && security < audit);

        assert_eq!(lines[network + 1], "  Components: AINS, I-Poll");
        assert_eq!(lines[audit + 1], "  Components: Intent Tokens, Evidence Trail");
    }

    #[test]
    fn test_report_renders_custom_stack() {
        let layer = ProtocolLayerDescriptor {
            name: "Solo",
            version: "9",
            components: &["One"],
            docs_url: "https://example.invalid",
        };
        let stack = ProtocolStack::new(layer, layer, layer);
        let lines: Vec<String> = describe_stack(&stack).lines().collect();
        assert_eq!(lines.len(), 4 + 3 * 4 + 4);
        assert_eq!(lines[4], "[NETWORK] Solo v9");
    }
}

use crate::models::FlightRecord;

pub const SHIFT_BRIEFING: &str = include_str!("../data/prompts/shift_briefing.txt");
pub const SAFETY_INSPECTION: &str = include_str!("../data/prompts/safety_inspection.txt");
pub const FLIGHT_ANALYSIS: &str = include_str!("../data/prompts/flight_analysis.txt");
pub const POOL_INVENTORY: &str = include_str!("../data/prompts/pool_inventory.txt");
pub const TEAM_OPTIMIZATION: &str = include_str!("../data/prompts/team_optimization.txt");
pub const CHAT_SYSTEM: &str = include_str!("../data/prompts/chat_system.txt");

pub const DEFAULT_INSPECTION_CONTEXT: &str = "general inspection";
pub const DEFAULT_DESCRIBE_PROMPT: &str = "Describe this image.";

/// Replace `{{key}}` placeholders in a template string.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        result = result.replace(&format!("{{{{{}}}}}", key), value);
    }
    result
}

/// One apron-data line per flight, in the order given.
pub fn flight_summary(flights: &[FlightRecord]) -> String {
    flights
        .iter()
        .map(|f| {
            format!(
                "FLIGHT: {} | AIRLINE: {} | STATUS: {} | GATE: {}",
                f.flight_number, f.airline, f.status, f.gate
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn shift_briefing(flights: &[FlightRecord]) -> String {
    render(SHIFT_BRIEFING, &[("summary", &flight_summary(flights))])
}

pub fn safety_inspection(context: Option<&str>) -> String {
    render(
        SAFETY_INSPECTION,
        &[("context", context.unwrap_or(DEFAULT_INSPECTION_CONTEXT))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_single_var() {
        assert_eq!(
            render("Hello {{name}}!", &[("name", "world")]),
            "Hello world!"
        );
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        assert_eq!(render("{{a}} and {{b}}", &[("a", "fuel")]), "fuel and {{b}}");
    }

    #[test]
    fn test_prompts_have_placeholders() {
        assert!(SHIFT_BRIEFING.contains("{{summary}}"));
        assert!(SAFETY_INSPECTION.contains("{{context}}"));
        assert!(FLIGHT_ANALYSIS.contains("{{flight}}"));
        assert!(POOL_INVENTORY.contains("{{vehicles}}"));
        assert!(TEAM_OPTIMIZATION.contains("{{profiles}}"));
        assert!(TEAM_OPTIMIZATION.contains("{{flights}}"));
        assert!(!CHAT_SYSTEM.is_empty());
    }

    #[test]
    fn test_flight_summary_line() {
        let flights = vec![FlightRecord::new("LA3055", "LATAM", "FUELING", "204")];
        assert_eq!(
            flight_summary(&flights),
            "FLIGHT: LA3055 | AIRLINE: LATAM | STATUS: FUELING | GATE: 204"
        );
    }

    #[test]
    fn test_flight_summary_keeps_order_and_duplicates() {
        let flights = vec![
            FlightRecord::new("G31450", "GOL", "QUEUED", "12"),
            FlightRecord::new("AD4021", "AZUL", "ASSIGNED", "7"),
            FlightRecord::new("G31450", "GOL", "QUEUED", "12"),
        ];
        let summary = flight_summary(&flights);
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("FLIGHT: G31450"));
        assert!(lines[1].starts_with("FLIGHT: AD4021"));
        assert_eq!(lines[0], lines[2]);
    }

    #[test]
    fn test_shift_briefing_with_no_flights() {
        let prompt = shift_briefing(&[]);
        assert!(prompt.contains("APRON DATA:"));
        assert!(!prompt.contains("{{summary}}"));
        assert!(!prompt.contains("FLIGHT:"));
    }

    #[test]
    fn test_shift_briefing_interpolates_records() {
        let prompt = shift_briefing(&[FlightRecord::new("LA3055", "LATAM", "FUELING", "204")]);
        assert!(prompt.contains("FLIGHT: LA3055 | AIRLINE: LATAM | STATUS: FUELING | GATE: 204"));
    }

    #[test]
    fn test_safety_inspection_default_context() {
        let prompt = safety_inspection(None);
        assert!(prompt.contains("Context: general inspection."));
        assert!(prompt.contains("[STATUS: SAFE/RISK]"));
    }

    #[test]
    fn test_safety_inspection_custom_context() {
        let prompt = safety_inspection(Some("fuel hydrant pit 3"));
        assert!(prompt.contains("Context: fuel hydrant pit 3."));
    }
}

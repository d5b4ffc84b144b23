//! Rendering of delivery plans for the console

use std::fmt;

use courier_core::DeliveryPlan;

/// Console transcript of a plan
struct TextPlan<'a>(&'a DeliveryPlan);

impl fmt::Display for TextPlan<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Starting at the depot...")?;
        for command in &self.0.commands {
            writeln!(f, "{command}")?;
        }
        writeln!(f, "You are back at the depot and your deliveries are done!")?;
        writeln!(
            f,
            "{:.2} miles travelled for all deliveries.",
            self.0.total_distance
        )
    }
}

pub fn render_text(plan: &DeliveryPlan) -> String {
    TextPlan(plan).to_string()
}

pub fn render_json(plan: &DeliveryPlan) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(plan)
}

//! Usage examples for the active shortcode

use crate::domain::year::format_year;

/// Start year used by the sample range rows
const SAMPLE_FROM: &str = "2020";

/// One row of the usage table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageExample {
    pub example: String,
    pub output: String,
    pub description: String,
}

/// Build the usage table for `tag`, rendered against `current_year`
pub fn usage_examples(tag: &str, current_year: &str) -> Vec<UsageExample> {
    vec![
        UsageExample {
            example: format!("[{}]", tag),
            output: format_year(current_year, None, "long"),
            description: "Displays the current year".to_string(),
        },
        UsageExample {
            example: format!("[{} from=\"{}\"]", tag, SAMPLE_FROM),
            output: format_year(current_year, Some(SAMPLE_FROM), "long"),
            description: format!("Year range from {} to current year", SAMPLE_FROM),
        },
        UsageExample {
            example: format!("[{} from=\"{}\" mode=\"short\"]", tag, SAMPLE_FROM),
            output: format_year(current_year, Some(SAMPLE_FROM), "short"),
            description: "Year range with shortened end year".to_string(),
        },
    ]
}

use serde::{Deserialize, Serialize};

/// One fashion item identified in an uploaded photo. The analysis model
/// reports one item per line as "Item Type, Color, Pattern, Material, Brand,
/// Size, Additional Details", writing "Not identifiable" for unknown slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarmentItem {
    pub item_type: String,
    pub color: Option<String>,
    pub pattern: Option<String>,
    pub material: Option<String>,
    pub brand: Option<String>,
    pub size: Option<String>,
    pub details: Option<String>,
}

impl GarmentItem {
    pub fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        let item_type = identified(parts.first()?)?;

        let attr = |index: usize| parts.get(index).and_then(|p| identified(p));
        // Free-text details may themselves contain commas.
        let details = if parts.len() > 6 {
            identified(&parts[6..].join(", "))
        } else {
            None
        };

        Some(Self {
            item_type,
            color: attr(1),
            pattern: attr(2),
            material: attr(3),
            brand: attr(4),
            size: attr(5),
            details,
        })
    }

    /// Parses the full multi-line analysis response, skipping blank lines and
    /// lines with no identifiable item.
    pub fn parse_report(content: &str) -> Vec<Self> {
        content.lines().filter_map(Self::parse_line).collect()
    }
}

fn identified(value: &str) -> Option<String> {
    let value = value.trim().trim_end_matches(':');
    if value.is_empty() || value.to_lowercase().starts_with("not identifiable") {
        None
    } else {
        Some(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub font_family: String,
    pub font_size: f32,
    pub label_color: String,
    pub edge_color: String,
    pub edge_label_color: String,
    pub marker_fill: String,
    pub marker_stroke: String,
    pub highlight_color: String,
}

impl Theme {
    /// Light console palette used by the traffic-control dashboard.
    pub fn console() -> Self {
        Self {
            font_family: "Arial, system-ui".to_string(),
            font_size: 2.8,
            label_color: "#000000".to_string(),
            edge_color: "#9aa0a6".to_string(),
            edge_label_color: "#000000".to_string(),
            marker_fill: "#FFFFFF".to_string(),
            marker_stroke: "#0F172A".to_string(),
            highlight_color: "#2563eb".to_string(),
        }
    }

    pub fn night() -> Self {
        Self {
            font_family: "Arial, system-ui".to_string(),
            font_size: 2.8,
            label_color: "#E2E8F0".to_string(),
            edge_color: "#64748B".to_string(),
            edge_label_color: "#CBD5E1".to_string(),
            marker_fill: "#0F172A".to_string(),
            marker_stroke: "#E2E8F0".to_string(),
            highlight_color: "#60A5FA".to_string(),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "console" | "default" | "light" => Some(Self::console()),
            "night" | "dark" => Some(Self::night()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::console()
    }
}

//! Gradient presets for the card background.

/// A left-to-right gradient preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPreset {
    pub start: &'static str,
    pub end: &'static str,
}

pub static GRADIENT_PRESETS: &[GradientPreset] = &[
    // Warm
    GradientPreset { start: "#ff512f", end: "#dd2476" }, // sunrise
    GradientPreset { start: "#fdc830", end: "#f37335" }, // citrus peel
    GradientPreset { start: "#e53935", end: "#e35d5b" }, // passion
    GradientPreset { start: "#ffb347", end: "#ffcc33" }, // peach
    GradientPreset { start: "#ffb7c5", end: "#ff6b6b" }, // cherry blossom
    GradientPreset { start: "#FF8C00", end: "#FF0080" }, // sunset
    GradientPreset { start: "#FF416C", end: "#FF4B2B" }, // love
    // Cool
    GradientPreset { start: "#2b5876", end: "#4e4376" }, // ocean blue
    GradientPreset { start: "#2193b0", end: "#6dd5ed" }, // cool blues
    GradientPreset { start: "#02aab0", end: "#00cdac" }, // green beach
    GradientPreset { start: "#00f260", end: "#0575e6" }, // neon glow
    GradientPreset { start: "#141e30", end: "#243b55" }, // royal
    GradientPreset { start: "#4568DC", end: "#B06AB3" }, // moonlight
    GradientPreset { start: "#0F2027", end: "#203A43" }, // deep ocean
    // Earth
    GradientPreset { start: "#cc2b5e", end: "#753a88" }, // purple love
    GradientPreset { start: "#2c3e50", end: "#fd746c" }, // dusk
    GradientPreset { start: "#f1f2b5", end: "#135058" }, // fresh turbos
    GradientPreset { start: "#3ca55c", end: "#b5ac49" }, // lemon twist
    GradientPreset { start: "#e6dada", end: "#274046" }, // winter
    GradientPreset { start: "#8A2387", end: "#E94057" }, // violet sunset
    // Elegant
    GradientPreset { start: "#000428", end: "#004e92" }, // midnight
    GradientPreset { start: "#434343", end: "#000000" }, // noir
    GradientPreset { start: "#5D4157", end: "#A8CABA" }, // dusty grass
    GradientPreset { start: "#1A2980", end: "#26D0CE" }, // deep blue
    GradientPreset { start: "#603813", end: "#b29f94" }, // desert
    GradientPreset { start: "#16222A", end: "#3A6073" }, // steel
    // Light
    GradientPreset { start: "#FFFFFF", end: "#ECE9E6" }, // clean
    GradientPreset { start: "#F3F9A7", end: "#CAC531" }, // lemon
    GradientPreset { start: "#E0EAFC", end: "#CFDEF3" }, // sky
    GradientPreset { start: "#F5F7FA", end: "#C3CFE2" }, // clouds
    GradientPreset { start: "#E6DADA", end: "#274046" }, // cold winter
];

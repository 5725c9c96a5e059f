//! Sample system descriptions spanning neuroscience, ecology, physics,
//! hydrology, computing, chemistry and cosmology.

/// Descriptions used by the `demo` command and the scenario tests.
pub const SAMPLE_DESCRIPTIONS: [&str; 8] = [
    "Neurons process information to form memories",
    "Energy flows through ecosystems transforming nutrients",
    "Electrons orbit nucleus creating stable atoms",
    "Water cycles from ocean to clouds to rain and back",
    "Algorithms process data to generate insights",
    "Quantum particles have potential states until measured",
    "Chemical bonds connect atoms to form molecules",
    "The big bang created the universe which evolved life",
];

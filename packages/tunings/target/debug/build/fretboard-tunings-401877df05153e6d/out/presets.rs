/// Embedded preset files as (name, yaml)
pub static PRESETS: &[(&str, &str)] = &[
    ("banjo/open_g", "name: Open G\ninstrument: banjo\ndescription: Five-string banjo; the short fifth string is listed first\nstrings: [G, D, G, B, D]\n"),
    ("bass/drop_d", "name: Drop D\ninstrument: bass\nstrings: [D, A, D, G]\n"),
    ("bass/five_string", "name: Five-String\ninstrument: bass\nstrings: [B, E, A, D, G]\n"),
    ("bass/standard", "name: Standard\ninstrument: bass\ndescription: Four-string bass, an octave below the guitar's lowest four strings\nstrings: [E, A, D, G]\n"),
    ("guitar/dadgad", "name: DADGAD\ninstrument: guitar\nstrings: [D, A, D, G, A, D]\n"),
    ("guitar/drop_d", "name: Drop D\ninstrument: guitar\ndescription: Lowest string dropped a whole step\nstrings: [D, A, D, G, B, E]\n"),
    ("guitar/half_step_down", "name: Half Step Down\ninstrument: guitar\nstrings: [Eb, Ab, Db, Gb, Bb, Eb]\n"),
    ("guitar/open_g", "name: Open G\ninstrument: guitar\ndescription: Open strings sound a G major chord\nstrings: [D, G, D, G, B, D]\n"),
    ("guitar/seven_string", "name: Seven-String Standard\ninstrument: guitar\nstrings: [B, E, A, D, G, B, E]\n"),
    ("guitar/standard", "name: Standard\ninstrument: guitar\ndescription: Standard six-string guitar tuning\nstrings: [E, A, D, G, B, E]\n"),
    ("mandolin/standard", "name: Standard\ninstrument: mandolin\ndescription: Tuned in fifths, one note per course\nstrings: [G, D, A, E]\n"),
    ("ukulele/baritone", "name: Baritone\ninstrument: ukulele\nstrings: [D, G, B, E]\n"),
    ("ukulele/standard", "name: Standard (re-entrant)\ninstrument: ukulele\ndescription: The G string is tuned above the C string\nstrings: [G, C, E, A]\n"),
    ("violin/standard", "name: Standard\ninstrument: violin\nstrings: [G, D, A, E]\n"),
];

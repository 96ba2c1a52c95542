use crate::models::Era;

/// One make and its catalogued models within an era
struct MakeEntry {
    name: &'static str,
    models: &'static [&'static str],
}

struct EraEntry {
    era: Era,
    makes: &'static [MakeEntry],
}

/// Fixed demo catalog driving the make/model steps of the funnel.
///
/// Listings themselves are not restricted to it: make and model stay
/// free-form fields, and every selection list gets the "Other / Unknown"
/// option appended by the caller.
static CATALOG: &[EraEntry] = &[
    EraEntry {
        era: Era::Pre1950,
        makes: &[
            MakeEntry {
                name: "Austin",
                models: &["Seven", "Ten", "Big Seven"],
            },
            MakeEntry {
                name: "Ford",
                models: &["Model Y", "Prefect", "Anglia"],
            },
            MakeEntry {
                name: "MG",
                models: &["TA", "TB", "TC"],
            },
            MakeEntry {
                name: "Morris",
                models: &["Eight", "Ten-Four", "Series E"],
            },
        ],
    },
    EraEntry {
        era: Era::Fifties,
        makes: &[
            MakeEntry {
                name: "Jaguar",
                models: &["XK120", "XK150", "Mk2", "E-Type"],
            },
            MakeEntry {
                name: "Triumph",
                models: &["TR3", "TR4", "Spitfire", "Herald"],
            },
            MakeEntry {
                name: "MG",
                models: &["MGA", "MGB", "Midget"],
            },
            MakeEntry {
                name: "Austin-Healey",
                models: &["100", "3000", "Sprite"],
            },
            MakeEntry {
                name: "Ford",
                models: &["Anglia 105E", "Cortina Mk1", "Zephyr"],
            },
            MakeEntry {
                name: "Rover",
                models: &["P4", "P5", "P6"],
            },
        ],
    },
    EraEntry {
        era: Era::Seventies,
        makes: &[
            MakeEntry {
                name: "Ford",
                models: &["Escort Mk1", "Escort Mk2", "Capri", "Cortina Mk3"],
            },
            MakeEntry {
                name: "Triumph",
                models: &["Stag", "Dolomite", "TR6", "TR7"],
            },
            MakeEntry {
                name: "Jaguar",
                models: &["XJ6 Series 1", "XJ6 Series 2", "XJS"],
            },
            MakeEntry {
                name: "Austin",
                models: &["Allegro", "Maxi", "Princess"],
            },
            MakeEntry {
                name: "Rover",
                models: &["SD1", "P6B"],
            },
            MakeEntry {
                name: "Vauxhall",
                models: &["Viva", "Chevette", "Firenza"],
            },
        ],
    },
    EraEntry {
        era: Era::Eighties,
        makes: &[
            MakeEntry {
                name: "BMW",
                models: &["E30 3 Series", "E36 3 Series", "E34 5 Series"],
            },
            MakeEntry {
                name: "Ford",
                models: &["Sierra", "Escort XR3i", "Fiesta XR2"],
            },
            MakeEntry {
                name: "Jaguar",
                models: &["XJ40", "X300", "XJS"],
            },
            MakeEntry {
                name: "Mercedes-Benz",
                models: &["W124", "190E", "R129 SL"],
            },
            MakeEntry {
                name: "Volkswagen",
                models: &["Golf Mk2", "Golf Mk3", "Corrado"],
            },
            MakeEntry {
                name: "Rover",
                models: &["Metro", "220 Turbo", "800"],
            },
        ],
    },
];

/// Catalogued makes for one era
pub fn makes_for(era: Era) -> Vec<&'static str> {
    CATALOG
        .iter()
        .find(|entry| entry.era == era)
        .map(|entry| entry.makes.iter().map(|m| m.name).collect())
        .unwrap_or_default()
}

/// Every catalogued make across all eras, deduplicated, in catalog order
pub fn all_makes() -> Vec<&'static str> {
    let mut makes = Vec::new();
    for entry in CATALOG {
        for make in entry.makes {
            if !makes.contains(&make.name) {
                makes.push(make.name);
            }
        }
    }
    makes
}

/// Catalogued models for a make within one era
pub fn models_for(era: Era, make: &str) -> Vec<&'static str> {
    CATALOG
        .iter()
        .find(|entry| entry.era == era)
        .and_then(|entry| entry.makes.iter().find(|m| m.name == make))
        .map(|m| m.models.to_vec())
        .unwrap_or_default()
}

/// Catalogued models for a make across all eras, deduplicated
pub fn models_for_make(make: &str) -> Vec<&'static str> {
    let mut models = Vec::new();
    for entry in CATALOG {
        for make_entry in entry.makes.iter().filter(|m| m.name == make) {
            for model in make_entry.models {
                if !models.contains(model) {
                    models.push(model);
                }
            }
        }
    }
    models
}

//! Chinese Zodiac (生肖): animal signs, year elements and pair compatibility.
//!
//! The animal epoch is independent of the Four Pillars epoch: 1900 is a Rat
//! year here, while the year pillar counts from CE 4. The year element comes
//! from a separate 10-year rotation anchored at 1984 (Wood).

use serde::Serialize;
use tracing::warn;

use crate::element::{Element, Polarity};
use crate::stem_branch::Branch;

/// CE year that maps to the Rat.
pub const ZODIAC_EPOCH_YEAR: i32 = 1900;

/// CE year that starts a Wood pair in the year-element rotation.
pub const YEAR_ELEMENT_EPOCH: i32 = 1984;

/// The 12 zodiac animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

/// All 12 animals in order (index 0 = Rat).
pub const ALL_ANIMALS: [Animal; 12] = [
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Rabbit,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Goat,
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
    Animal::Pig,
];

/// The four Three Harmony (三合) triads, indexed by animal index mod 4.
pub const THREE_HARMONY_TRIADS: [[Animal; 3]; 4] = [
    [Animal::Rat, Animal::Dragon, Animal::Monkey],
    [Animal::Ox, Animal::Snake, Animal::Rooster],
    [Animal::Tiger, Animal::Horse, Animal::Dog],
    [Animal::Rabbit, Animal::Goat, Animal::Pig],
];

impl Animal {
    /// Animal at `index mod 12`.
    pub const fn from_index(index: u8) -> Self {
        ALL_ANIMALS[(index % 12) as usize]
    }

    /// 0-based index (Rat=0 .. Pig=11), same as the branch index.
    pub const fn index(self) -> u8 {
        match self {
            Self::Rat => 0,
            Self::Ox => 1,
            Self::Tiger => 2,
            Self::Rabbit => 3,
            Self::Dragon => 4,
            Self::Snake => 5,
            Self::Horse => 6,
            Self::Goat => 7,
            Self::Monkey => 8,
            Self::Rooster => 9,
            Self::Dog => 10,
            Self::Pig => 11,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }

    /// Case-insensitive lookup by English name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        ALL_ANIMALS
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }

    /// Earthly Branch carrying this animal.
    pub const fn branch(self) -> Branch {
        Branch::from_index(self.index())
    }

    /// Inherent element of the animal (its branch element).
    pub const fn element(self) -> Element {
        self.branch().element()
    }

    pub const fn polarity(self) -> Polarity {
        self.branch().polarity()
    }

    /// Six Harmony (六合) partner: Rat-Ox, Tiger-Rabbit, Dragon-Snake,
    /// Horse-Goat, Monkey-Rooster, Dog-Pig.
    pub const fn six_harmony(self) -> Animal {
        // Partners are adjacent, so flip the lowest bit of the index.
        Animal::from_index(self.index() ^ 1)
    }

    /// Six Conflict (六沖) partner: the animal 6 positions away.
    pub const fn six_conflict(self) -> Animal {
        Animal::from_index(self.index() + 6)
    }

    /// The Three Harmony triad containing this animal.
    pub const fn triad(self) -> [Animal; 3] {
        THREE_HARMONY_TRIADS[(self.index() % 4) as usize]
    }

    /// Static lucky attributes for this animal.
    pub fn lucky_attributes(self) -> &'static AnimalLuck {
        &ANIMAL_LUCK[self.index() as usize]
    }
}

/// A zodiac sign resolved for a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacSign {
    pub animal: Animal,
    /// Element of the year in the 10-year rotation, not the animal's own element.
    pub element: Element,
    pub polarity: Polarity,
    pub year: i32,
}

/// Animal of a CE year.
pub fn zodiac_animal(year: i32) -> Animal {
    Animal::from_index((i64::from(year) - i64::from(ZODIAC_EPOCH_YEAR)).rem_euclid(12) as u8)
}

/// Element of a CE year: each element rules two consecutive years.
pub fn year_element(year: i32) -> Element {
    Element::from_index(
        (i64::from(year) - i64::from(YEAR_ELEMENT_EPOCH))
            .div_euclid(2)
            .rem_euclid(5) as u8,
    )
}

/// Resolve the zodiac sign of a CE year.
pub fn zodiac_sign(year: i32) -> ZodiacSign {
    let animal = zodiac_animal(year);
    ZodiacSign {
        animal,
        element: year_element(year),
        polarity: animal.polarity(),
        year,
    }
}

/// Which fixed relation links two animals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ZodiacRelation {
    SixHarmony,
    ThreeHarmony,
    SixConflict,
    Neutral,
}

impl ZodiacRelation {
    /// Classify a pair. Checked in order: Six Harmony, Three Harmony,
    /// Six Conflict, then Neutral.
    pub fn between(a: Animal, b: Animal) -> Self {
        if a.six_harmony() == b {
            Self::SixHarmony
        } else if a != b && a.triad().contains(&b) {
            Self::ThreeHarmony
        } else if a.six_conflict() == b {
            Self::SixConflict
        } else {
            Self::Neutral
        }
    }

    pub const fn score(self) -> u8 {
        match self {
            Self::SixHarmony => 95,
            Self::ThreeHarmony => 85,
            Self::SixConflict => 35,
            Self::Neutral => 60,
        }
    }

    /// Short Chinese label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::SixHarmony => "最佳",
            Self::ThreeHarmony => "三合",
            Self::SixConflict => "六沖",
            Self::Neutral => "普通",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::SixHarmony => "Six Harmonies (六合) - Soulmates",
            Self::ThreeHarmony => "Three Harmonies - Great match",
            Self::SixConflict => "Six Conflicts - Challenging",
            Self::Neutral => "Neutral compatibility",
        }
    }
}

/// Pairwise animal compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacCompatibility {
    pub score: u8,
    pub relation: ZodiacRelation,
    pub label: &'static str,
    pub description: &'static str,
}

/// Score two animals. Symmetric in its arguments.
pub fn zodiac_compatibility(a: Animal, b: Animal) -> ZodiacCompatibility {
    let relation = ZodiacRelation::between(a, b);
    ZodiacCompatibility {
        score: relation.score(),
        relation,
        label: relation.label(),
        description: relation.description(),
    }
}

/// Lucky colors, numbers, directions, flowers and gemstones of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnimalLuck {
    pub colors: &'static [&'static str],
    pub numbers: &'static [u32],
    pub directions: &'static [&'static str],
    pub flowers: &'static [&'static str],
    pub gemstones: &'static [&'static str],
}

impl AnimalLuck {
    pub const EMPTY: AnimalLuck = AnimalLuck {
        colors: &[],
        numbers: &[],
        directions: &[],
        flowers: &[],
        gemstones: &[],
    };

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.numbers.is_empty()
            && self.directions.is_empty()
            && self.flowers.is_empty()
            && self.gemstones.is_empty()
    }
}

/// Lucky attributes by animal name; unknown names yield [`AnimalLuck::EMPTY`].
pub fn lucky_attributes_by_name(name: &str) -> &'static AnimalLuck {
    match Animal::from_name(name) {
        Some(animal) => animal.lucky_attributes(),
        None => {
            warn!(name, "unknown zodiac animal, returning empty attributes");
            &AnimalLuck::EMPTY
        }
    }
}

static ANIMAL_LUCK: [AnimalLuck; 12] = [
    // Rat
    AnimalLuck {
        colors: &["blue", "gold", "green"],
        numbers: &[2, 3],
        directions: &["east", "northwest"],
        flowers: &["jasmine", "rose"],
        gemstones: &["amethyst", "citrine"],
    },
    // Ox
    AnimalLuck {
        colors: &["white", "yellow", "green"],
        numbers: &[1, 9],
        directions: &["north", "southeast"],
        flowers: &["tulip", "rose"],
        gemstones: &["emerald", "citrine"],
    },
    // Tiger
    AnimalLuck {
        colors: &["blue", "gray", "orange"],
        numbers: &[1, 3, 4],
        directions: &["north", "south"],
        flowers: &["jasmine", "purple flower"],
        gemstones: &["emerald", "sapphire"],
    },
    // Rabbit
    AnimalLuck {
        colors: &["red", "pink", "purple", "blue"],
        numbers: &[3, 4, 9],
        directions: &["south", "east", "northwest"],
        flowers: &["orchid", "jasmine"],
        gemstones: &["alexandrite", "pearl"],
    },
    // Dragon
    AnimalLuck {
        colors: &["gold", "silver", "white"],
        numbers: &[1, 6, 7],
        directions: &["north", "south"],
        flowers: &["jasmine", "hydrangea"],
        gemstones: &["agate", "diamond"],
    },
    // Snake
    AnimalLuck {
        colors: &["red", "black", "yellow"],
        numbers: &[2, 8, 9],
        directions: &["southeast", "southwest"],
        flowers: &["orchid", "ivy"],
        gemstones: &["carbuncle", "jade"],
    },
    // Horse
    AnimalLuck {
        colors: &["yellow", "green"],
        numbers: &[2, 3, 7],
        directions: &["south", "northeast"],
        flowers: &["carnation", "jasmine"],
        gemstones: &["emerald", "jade"],
    },
    // Goat
    AnimalLuck {
        colors: &["green", "red", "purple"],
        numbers: &[3, 9],
        directions: &["southwest", "northeast"],
        flowers: &["carnation", "primrose"],
        gemstones: &["agates", "jade"],
    },
    // Monkey
    AnimalLuck {
        colors: &["white", "blue", "gold"],
        numbers: &[1, 7, 8],
        directions: &["west", "north"],
        flowers: &["chrysanthemum", "jasmine"],
        gemstones: &["garnet", "topaz"],
    },
    // Rooster
    AnimalLuck {
        colors: &["gold", "brown", "yellow"],
        numbers: &[5, 7, 8],
        directions: &["west", "northeast"],
        flowers: &["gladiolus", "morning glory"],
        gemstones: &["onyx", "sapphire"],
    },
    // Dog
    AnimalLuck {
        colors: &["red", "green", "purple"],
        numbers: &[3, 4, 9],
        directions: &["southeast", "northeast"],
        flowers: &["rose", "cymbidium"],
        gemstones: &["ruby", "jade"],
    },
    // Pig
    AnimalLuck {
        colors: &["yellow", "gray", "brown", "gold"],
        numbers: &[2, 5, 8],
        directions: &["northeast", "southwest"],
        flowers: &["lily", "chrysanthemum"],
        gemstones: &["emerald", "jade"],
    },
];

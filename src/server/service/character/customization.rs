//! Mapping of a character's legacy appearance bytes onto the modern customization options.
//!
//! The mapping is a rule table evaluated top to bottom by `resolve`. Each rule targets one
//! option by name and selects a choice by order index, by choice name or by explicit
//! choice id. Rules are scoped by race, gender and class; a later rule for an option that
//! already resolved replaces the earlier choice in place, which is how the death knight
//! eye colors override the defaults.

use crate::{
    model::character::CustomizationChoiceDto,
    server::{dbc::customization::CustomizationData, model::character::CharacterData},
};

const HUMAN: u8 = 1;
const ORC: u8 = 2;
const DWARF: u8 = 3;
const NIGHT_ELF: u8 = 4;
const UNDEAD: u8 = 5;
const TAUREN: u8 = 6;
const GNOME: u8 = 7;
const TROLL: u8 = 8;
const BLOOD_ELF: u8 = 10;
const DRAENEI: u8 = 11;

const MALE: u8 = 0;
const FEMALE: u8 = 1;

const DEATH_KNIGHT: u8 = 6;

/// Appearance byte of the character a rule reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Skin,
    Face,
    HairStyle,
    HairColor,
    FacialStyle,
}

impl Field {
    fn read(self, character: &CharacterData) -> u8 {
        match self {
            Field::Skin => character.skin,
            Field::Face => character.face,
            Field::HairStyle => character.hair_style,
            Field::HairColor => character.hair_color,
            Field::FacialStyle => character.facial_style,
        }
    }
}

/// Numeric operand: an order index or a choice id.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Fixed(i64),
    Field(Field),
    /// Value at the field's position; out of range skips the rule.
    Map(Field, &'static [i64]),
    Derived(Field, fn(u8) -> i64),
}

impl Number {
    fn eval(self, character: &CharacterData) -> Option<i64> {
        match self {
            Number::Fixed(value) => Some(value),
            Number::Field(field) => Some(field.read(character) as i64),
            Number::Map(field, values) => values.get(field.read(character) as usize).copied(),
            Number::Derived(field, derive) => Some(derive(field.read(character))),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Text {
    Fixed(&'static str),
    /// Name at the field's position; out of range skips the rule.
    Map(Field, &'static [&'static str]),
}

impl Text {
    fn eval(self, character: &CharacterData) -> Option<&'static str> {
        match self {
            Text::Fixed(name) => Some(name),
            Text::Map(field, names) => names.get(field.read(character) as usize).copied(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Choice {
    /// Choice with this `OrderIndex`; skipped when the option has none.
    Index(Number),
    /// Choice with this name; skipped when the option has none.
    Name(Text),
    /// Explicit choice id, used as is once the option exists.
    Id(Number),
}

#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub race: Option<u8>,
    pub gender: Option<u8>,
    pub class: Option<u8>,
    pub option: &'static str,
    pub choice: Choice,
}

impl Rule {
    const fn any(option: &'static str, choice: Choice) -> Self {
        Self {
            race: None,
            gender: None,
            class: None,
            option,
            choice,
        }
    }

    const fn race(race: u8, option: &'static str, choice: Choice) -> Self {
        Self {
            race: Some(race),
            ..Self::any(option, choice)
        }
    }

    const fn gender(race: u8, gender: u8, option: &'static str, choice: Choice) -> Self {
        Self {
            race: Some(race),
            gender: Some(gender),
            ..Self::any(option, choice)
        }
    }

    const fn death_knight(race: u8, gender: u8, option: &'static str, choice: Choice) -> Self {
        Self {
            race: Some(race),
            gender: Some(gender),
            class: Some(DEATH_KNIGHT),
            option,
            choice,
        }
    }

    fn applies_to(&self, character: &CharacterData) -> bool {
        self.race.is_none_or(|race| race == character.race)
            && self.gender.is_none_or(|gender| gender == character.gender)
            && self.class.is_none_or(|class| class == character.class)
    }

    /// Resolves the rule against a customization document.
    ///
    /// # Returns
    /// - `Some(CustomizationChoiceDto)` - Option and choice ids
    /// - `None` - The option, the choice or the mapped value does not exist
    fn resolve(
        &self,
        data: &CustomizationData,
        character: &CharacterData,
    ) -> Option<CustomizationChoiceDto> {
        let option = data.option(self.option)?;

        let choice_id = match self.choice {
            Choice::Index(index) => option.choice_by_index(index.eval(character)?)?.id,
            Choice::Name(name) => option.choice_by_name(name.eval(character)?)?.id,
            Choice::Id(id) => u32::try_from(id.eval(character)?).ok()?,
        };

        Some(CustomizationChoiceDto {
            option_id: option.id,
            choice_id,
        })
    }
}

const fn index(field: Field) -> Choice {
    Choice::Index(Number::Field(field))
}

const fn fixed_index(index: i64) -> Choice {
    Choice::Index(Number::Fixed(index))
}

const fn index_map(field: Field, indexes: &'static [i64]) -> Choice {
    Choice::Index(Number::Map(field, indexes))
}

const fn derived_index(field: Field, derive: fn(u8) -> i64) -> Choice {
    Choice::Index(Number::Derived(field, derive))
}

const fn name(name: &'static str) -> Choice {
    Choice::Name(Text::Fixed(name))
}

const fn name_map(field: Field, names: &'static [&'static str]) -> Choice {
    Choice::Name(Text::Map(field, names))
}

const fn id(id: i64) -> Choice {
    Choice::Id(Number::Fixed(id))
}

const fn id_map(field: Field, ids: &'static [i64]) -> Choice {
    Choice::Id(Number::Map(field, ids))
}

fn gnome_mustache(facial_style: u8) -> i64 {
    if facial_style > 1 {
        facial_style as i64 - 1
    } else {
        0
    }
}

fn gnome_beard(facial_style: u8) -> i64 {
    if facial_style < 7 {
        facial_style as i64
    } else {
        0
    }
}

fn gnome_eyebrows(facial_style: u8) -> i64 {
    if facial_style < 6 {
        facial_style as i64
    } else {
        1
    }
}

fn next(value: u8) -> i64 {
    value as i64 + 1
}

use Field::{Face, FacialStyle, HairColor, HairStyle, Skin};

/// Customization rules in evaluation order.
pub static RULES: &[Rule] = &[
    Rule::any("Face", index(Face)),
    Rule::any("Skin Color", index(Skin)),
    Rule::any("Hair Style", index(HairStyle)),
    Rule::any("Hair Color", index(HairColor)),
    // Human
    Rule::gender(HUMAN, MALE, "Mustache", name_map(FacialStyle, &[
        "Horseshoe", "Brush", "Horseshoe", "None", "Brush", "Brush", "Horseshoe", "Brush", "None",
    ])),
    Rule::gender(HUMAN, MALE, "Beard", name_map(FacialStyle, &[
        "Short", "Chin Puff", "Soul Patch", "Goatee", "Goatee", "None", "Goatee", "None", "None",
    ])),
    Rule::gender(HUMAN, MALE, "Sideburns", name_map(FacialStyle, &[
        "Medium", "None", "None", "Medium", "Long", "Long", "None", "None", "None",
    ])),
    Rule::gender(HUMAN, MALE, "Eyebrows", name("Natural")),
    Rule::gender(HUMAN, MALE, "Face Shape", name("Narrow")),
    Rule::gender(HUMAN, MALE, "Eye Color", id_map(Face, &[
        4138, 4140, 4130, 4136, 4141, 4134, 4130, 4138, 4144, 4135, 4126, 4136,
    ])),
    Rule::gender(HUMAN, FEMALE, "Piercings", index(FacialStyle)),
    Rule::gender(HUMAN, FEMALE, "Eyebrows", name("Natural")),
    Rule::gender(HUMAN, FEMALE, "Face Shape", name("Narrow")),
    Rule::gender(HUMAN, FEMALE, "Makeup", name("None")),
    Rule::gender(HUMAN, FEMALE, "Necklace", name("None")),
    Rule::gender(HUMAN, FEMALE, "Eye Color", id_map(Face, &[
        4162, 4153, 4161, 4164, 4154, 4160, 4160, 4157, 4152, 4154, 4155, 4165, 4163, 4155, 4151,
    ])),
    Rule::death_knight(HUMAN, MALE, "Eye Color", id(4534)),
    Rule::death_knight(HUMAN, FEMALE, "Eye Color", id(4535)),
    // Dwarf
    Rule::race(DWARF, "Tattoo", name("None")),
    Rule::race(DWARF, "Tattoo Color", fixed_index(0)),
    Rule::race(DWARF, "Eyebrows", fixed_index(0)),
    Rule::gender(DWARF, MALE, "Mustache", name_map(FacialStyle, &[
        "Trimmed", "Bushy", "Grand", "Thin Braids", "Wise", "Thick Braids", "Fancy", "Bold",
        "Tied", "None", "None",
    ])),
    Rule::gender(DWARF, MALE, "Beard", index(FacialStyle)),
    Rule::gender(DWARF, MALE, "Earrings", name("None")),
    Rule::gender(DWARF, MALE, "Nose Ring", name("None")),
    Rule::gender(DWARF, MALE, "Eye Color", fixed_index(0)),
    Rule::gender(DWARF, FEMALE, "Earrings", index_map(FacialStyle, &[0, 1, 2, 3, 0, 4])),
    Rule::gender(DWARF, FEMALE, "Piercings", name_map(FacialStyle, &[
        "None", "None", "None", "None", "Right Nostril", "None",
    ])),
    Rule::gender(DWARF, FEMALE, "Eye Color", fixed_index(0)),
    Rule::death_knight(DWARF, MALE, "Eye Color", id(5559)),
    Rule::death_knight(DWARF, FEMALE, "Eye Color", id(5587)),
    // Gnome
    Rule::gender(GNOME, MALE, "Mustache", derived_index(FacialStyle, gnome_mustache)),
    Rule::gender(GNOME, MALE, "Beard", derived_index(FacialStyle, gnome_beard)),
    Rule::gender(GNOME, MALE, "Eyebrows", derived_index(FacialStyle, gnome_eyebrows)),
    Rule::gender(GNOME, MALE, "Eye Color", fixed_index(0)),
    Rule::gender(GNOME, FEMALE, "Earrings", index(FacialStyle)),
    Rule::gender(GNOME, FEMALE, "Earring Color", id(8796)),
    Rule::gender(GNOME, FEMALE, "Eye Color", fixed_index(0)),
    Rule::death_knight(GNOME, MALE, "Eye Color", id(5629)),
    Rule::death_knight(GNOME, FEMALE, "Eye Color", id(5643)),
    // Night Elf
    Rule::race(NIGHT_ELF, "Vines", name("None")),
    Rule::race(NIGHT_ELF, "Vine Color", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Ears", name("Thin")),
    Rule::race(NIGHT_ELF, "Scars", name("None")),
    Rule::gender(NIGHT_ELF, MALE, "Sideburns", name_map(FacialStyle, &[
        "None", "Groomed", "None", "Short", "Medium", "Groomed",
    ])),
    Rule::gender(NIGHT_ELF, MALE, "Mustache", name_map(FacialStyle, &[
        "None", "Groomed", "None", "Thin", "None", "None",
    ])),
    Rule::gender(NIGHT_ELF, MALE, "Beard", name_map(FacialStyle, &[
        "None", "Trimmed", "Full", "None", "Short", "Long",
    ])),
    Rule::gender(NIGHT_ELF, MALE, "Eyebrows", name_map(FacialStyle, &[
        "Shaved", "Short", "Long", "Flat", "Short", "Owl",
    ])),
    Rule::gender(NIGHT_ELF, FEMALE, "Eyebrows", name("Long")),
    Rule::gender(NIGHT_ELF, FEMALE, "Markings", derived_index(FacialStyle, next)),
    Rule::gender(NIGHT_ELF, FEMALE, "Markings Color", index_map(HairColor, &[1, 2, 3, 4, 5, 3, 6, 7])),
    Rule::race(NIGHT_ELF, "Blindfold", name("")),
    Rule::race(NIGHT_ELF, "Headdress", name("None")),
    Rule::race(NIGHT_ELF, "Earrings", name("None")),
    Rule::race(NIGHT_ELF, "Nose Ring", name("None")),
    Rule::race(NIGHT_ELF, "Necklace", name("None")),
    Rule::race(NIGHT_ELF, "Horns", name("None")),
    Rule::race(NIGHT_ELF, "Tattoo", name("None")),
    Rule::race(NIGHT_ELF, "Tattoo Color", name("None")),
    Rule::gender(NIGHT_ELF, MALE, "Eye Color", id(7610)),
    Rule::gender(NIGHT_ELF, FEMALE, "Eye Color", id(7619)),
    Rule::death_knight(NIGHT_ELF, MALE, "Eye Color", id(7618)),
    Rule::death_knight(NIGHT_ELF, FEMALE, "Eye Color", id(7634)),
    // Draenei
    Rule::race(DRAENEI, "Circlet", name("None")),
    Rule::gender(DRAENEI, MALE, "Jewelry Color", id(8707)),
    Rule::gender(DRAENEI, FEMALE, "Jewelry Color", id(8646)),
    Rule::race(DRAENEI, "Horn Decoration", name("None")),
    Rule::gender(DRAENEI, MALE, "Tail", name("Long")),
    Rule::gender(DRAENEI, FEMALE, "Tail", name("Short")),
    Rule::gender(DRAENEI, MALE, "Facial Hair", name_map(FacialStyle, &[
        "Bare", "Bare", "Burns", "Chops", "Mustache", "Soul Patch", "Handlebar", "Bare",
    ])),
    Rule::gender(DRAENEI, MALE, "Tendrils", name_map(FacialStyle, &[
        "None", "Splayed", "Double", "Fanned", "Single", "Paired", "Uniform", "Twin",
    ])),
    Rule::gender(DRAENEI, FEMALE, "Horns", name_map(FacialStyle, &[
        "Sweeping", "Curled", "Curved", "Thick", "Wide", "Grand", "Short",
    ])),
    Rule::gender(DRAENEI, MALE, "Eye Color", id(6976)),
    Rule::gender(DRAENEI, FEMALE, "Eye Color", id(6978)),
    Rule::death_knight(DRAENEI, MALE, "Eye Color", id(6977)),
    Rule::death_knight(DRAENEI, FEMALE, "Eye Color", id(6979)),
    // Orc
    Rule::race(ORC, "Scars", name("None")),
    Rule::race(ORC, "Grime", name("None")),
    Rule::race(ORC, "Tattoo", name("None")),
    Rule::race(ORC, "War Paint", name("None")),
    Rule::race(ORC, "War Paint Color", name("None")),
    Rule::gender(ORC, MALE, "Beard", name_map(FacialStyle, &[
        "None", "Stubble", "Thick", "Full", "Tied", "Braid", "Twin Braids", "None", "Ringed",
        "Split", "Goatee",
    ])),
    Rule::gender(ORC, MALE, "Sideburns", name_map(FacialStyle, &[
        "None", "None", "Full", "Low", "Full", "None", "None", "Braids", "None", "Full", "Thick",
    ])),
    Rule::gender(ORC, MALE, "Earrings", name("None")),
    Rule::gender(ORC, MALE, "Nose Ring", name("None")),
    Rule::gender(ORC, MALE, "Tusks", name("Natural")),
    Rule::gender(ORC, MALE, "Upright", name("Hunched")),
    Rule::gender(ORC, MALE, "Eye Color", fixed_index(0)),
    Rule::gender(ORC, FEMALE, "Earrings", index_map(FacialStyle, &[0, 1, 2, 0, 1, 2, 4])),
    Rule::gender(ORC, FEMALE, "Nose Ring", index_map(FacialStyle, &[0, 0, 0, 1, 1, 1, 0])),
    Rule::gender(ORC, FEMALE, "Necklace", name("None")),
    Rule::gender(ORC, FEMALE, "Eye Color", fixed_index(0)),
    Rule::death_knight(ORC, MALE, "Eye Color", id(9289)),
    Rule::death_knight(ORC, FEMALE, "Eye Color", id(9313)),
    // Undead
    Rule::race(UNDEAD, "Skin Type", name("Bony")),
    Rule::gender(UNDEAD, MALE, "Jaw Features", name_map(FacialStyle, &[
        "Intact", "Rot-Kissed", "Intact", "Slackjawed", "Drooler", "Intact", "Slackjawed",
        "Drooler", "Bonejawed", "Jawsome", "Toothy", "Unhinged", "Cheeky", "Loose", "Intact",
        "Slackjawed", "Slobber",
    ])),
    Rule::gender(UNDEAD, MALE, "Face Features", index_map(FacialStyle, &[
        0, 0, 1, 1, 1, 2, 3, 3, 0, 0, 0, 0, 0, 0, 4, 4, 0,
    ])),
    Rule::gender(UNDEAD, MALE, "Eye Color", id_map(FacialStyle, &[
        5330, 5330, 6304, 6304, 6304, 5330, 5330, 5330, 5330, 5330, 6304, 6304, 5330, 5330, 5330,
        5330, 5330,
    ])),
    Rule::gender(UNDEAD, FEMALE, "Face Features", name_map(FacialStyle, &[
        "None", "None", "Strapped", "Rotting", "None", "None", "None", "Putrid",
    ])),
    Rule::gender(UNDEAD, FEMALE, "Jaw Features", name_map(FacialStyle, &[
        "Intact", "Stitched", "Intact", "Intact", "Bonejawed", "Toothy", "Cheeky", "Intact",
    ])),
    Rule::gender(UNDEAD, FEMALE, "Eye Color", id_map(FacialStyle, &[
        5337, 5337, 6305, 5337, 5337, 6305, 5337, 5337,
    ])),
    Rule::death_knight(UNDEAD, MALE, "Eye Color", id(5344)),
    Rule::death_knight(UNDEAD, FEMALE, "Eye Color", id(5345)),
    // Tauren
    Rule::race(TAUREN, "Horn Style", index(HairStyle)),
    Rule::race(TAUREN, "Horn Color", index(HairColor)),
    Rule::race(TAUREN, "Foremane", name("Short")),
    Rule::race(TAUREN, "Face Paint", name("None")),
    Rule::race(TAUREN, "Headdress", name("None")),
    Rule::race(TAUREN, "Necklace", name("None")),
    Rule::race(TAUREN, "Jewelry Color", fixed_index(0)),
    Rule::race(TAUREN, "Flower", name("None")),
    Rule::race(TAUREN, "Body Paint", name("None")),
    Rule::race(TAUREN, "Paint Color", fixed_index(0)),
    Rule::gender(TAUREN, MALE, "Hair", name_map(FacialStyle, &[
        "Mane", "Braids", "Chops", "Sideburns", "Mane", "Wrapped", "Braids",
    ])),
    Rule::gender(TAUREN, MALE, "Facial Hair", name_map(FacialStyle, &[
        "Clean", "Braid", "Beard", "Wrapped", "Curtain", "Clean", "Split",
    ])),
    Rule::gender(TAUREN, MALE, "Nose Ring", name_map(FacialStyle, &[
        "None", "Small", "Open", "None", "None", "Bead", "Open",
    ])),
    Rule::gender(TAUREN, MALE, "Eye Color", fixed_index(0)),
    Rule::gender(TAUREN, FEMALE, "Hair", index(FacialStyle)),
    Rule::gender(TAUREN, FEMALE, "Earrings", name("None")),
    Rule::gender(TAUREN, FEMALE, "Nose Ring", name("None")),
    Rule::gender(TAUREN, FEMALE, "Eye Color", fixed_index(0)),
    Rule::death_knight(TAUREN, MALE, "Eye Color", id(7281)),
    Rule::death_knight(TAUREN, FEMALE, "Eye Color", id(7289)),
    // Troll
    Rule::race(TROLL, "Body Paint", name("None")),
    Rule::race(TROLL, "Body Paint Color", name("None")),
    Rule::race(TROLL, "Piercing", name("None")),
    Rule::gender(TROLL, MALE, "Tusks", name_map(FacialStyle, &[
        "Tusked", "Gougers", "Mammoth", "Spears", "Bridle", "Tusked", "Gougers", "Mammoth",
        "Spears", "Bridle", "Gougers",
    ])),
    Rule::gender(TROLL, MALE, "Face Paint", name_map(FacialStyle, &[
        "None", "None", "None", "None", "None", "Berserker", "Fangs", "Mask", "Oni", "Prophet",
        "War",
    ])),
    Rule::gender(TROLL, MALE, "Face Paint Color", derived_index(HairColor, next)),
    Rule::gender(TROLL, MALE, "Earrings", name("None")),
    Rule::gender(TROLL, MALE, "Eye Color", fixed_index(0)),
    Rule::gender(TROLL, FEMALE, "Tusks", index(FacialStyle)),
    Rule::gender(TROLL, FEMALE, "Face Paint", name("None")),
    Rule::gender(TROLL, FEMALE, "Face Paint Color", fixed_index(0)),
    Rule::gender(TROLL, FEMALE, "Earrings", name("Hoops")),
    Rule::gender(TROLL, FEMALE, "Eye Color", fixed_index(0)),
    Rule::death_knight(TROLL, MALE, "Eye Color", id(8451)),
    Rule::death_knight(TROLL, FEMALE, "Eye Color", id(8468)),
    // Blood Elf
    Rule::race(BLOOD_ELF, "Ears", name("Long")),
    Rule::race(BLOOD_ELF, "Horns", name("None")),
    Rule::race(BLOOD_ELF, "Blindfold", name("None")),
    Rule::race(BLOOD_ELF, "Tattoo", name("None")),
    Rule::race(BLOOD_ELF, "Tattoo Color", fixed_index(0)),
    Rule::gender(BLOOD_ELF, MALE, "Facial Hair", index(FacialStyle)),
    Rule::gender(BLOOD_ELF, FEMALE, "Earrings", index(FacialStyle)),
    Rule::gender(BLOOD_ELF, FEMALE, "Jewelry Color", fixed_index(0)),
    Rule::gender(BLOOD_ELF, FEMALE, "Necklace", name("None")),
    Rule::gender(BLOOD_ELF, FEMALE, "Armbands", name("None")),
    Rule::gender(BLOOD_ELF, FEMALE, "Bracelets", name("None")),
    Rule::gender(BLOOD_ELF, MALE, "Eye Color", id(6570)),
    Rule::gender(BLOOD_ELF, FEMALE, "Eye Color", id(6589)),
    Rule::death_knight(BLOOD_ELF, MALE, "Eye Color", id(6586)),
    Rule::death_knight(BLOOD_ELF, FEMALE, "Eye Color", id(6605)),
    // Druid forms of the races that can be druids
    Rule::race(NIGHT_ELF, "Bear Form", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Cat Form", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Aquatic Form", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Travel Form", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Flight Form", fixed_index(0)),
    Rule::race(NIGHT_ELF, "Moonkin Form", fixed_index(0)),
    Rule::race(TAUREN, "Bear Form", fixed_index(0)),
    Rule::race(TAUREN, "Cat Form", fixed_index(0)),
    Rule::race(TAUREN, "Aquatic Form", fixed_index(0)),
    Rule::race(TAUREN, "Travel Form", fixed_index(0)),
    Rule::race(TAUREN, "Flight Form", fixed_index(0)),
    Rule::race(TAUREN, "Moonkin Form", fixed_index(0)),
];

/// Resolves the customization choices of a character.
///
/// # Arguments
/// - `data` - Customization document of the character's race and gender
/// - `character` - Character appearance, race, gender and class
///
/// # Returns
/// - Resolved option/choice pairs in first-resolution order, one per option
pub fn resolve(data: &CustomizationData, character: &CharacterData) -> Vec<CustomizationChoiceDto> {
    resolve_rules(RULES, data, character)
}

fn resolve_rules(
    rules: &[Rule],
    data: &CustomizationData,
    character: &CharacterData,
) -> Vec<CustomizationChoiceDto> {
    let mut resolved: Vec<CustomizationChoiceDto> = Vec::new();

    for rule in rules.iter().filter(|rule| rule.applies_to(character)) {
        let Some(choice) = rule.resolve(data, character) else {
            continue;
        };

        match resolved
            .iter_mut()
            .find(|existing| existing.option_id == choice.option_id)
        {
            Some(existing) => *existing = choice,
            None => resolved.push(choice),
        }
    }

    resolved
}

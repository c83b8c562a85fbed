//! Character customization document fixtures.
//!
//! Every (race, gender) document shares a common option list. Choice ids are
//! `option_id * 100 + order_index`, which lets tests predict resolved ids. Human
//! documents additionally carry the named choices used for facial hair resolution.

use std::path::Path;

use serde_json::{json, Value};

use crate::error::TestError;

const RACES: [u8; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 10, 11];
const GENDERS: [u8; 2] = [0, 1];

/// Options present for every race with ids 1..; each has choices at indexes 0..=11.
pub const COMMON_OPTIONS: [&str; 5] = ["Skin Color", "Face", "Hair Style", "Hair Color", "Eye Color"];

/// Option id of a common option name.
///
/// # Arguments
/// - `name` - One of `COMMON_OPTIONS`
///
/// # Returns
/// - `Some(u32)` - Option id
/// - `None` - Not a common option
pub fn option_id(name: &str) -> Option<u32> {
    COMMON_OPTIONS
        .iter()
        .position(|option| *option == name)
        .map(|index| index as u32 + 1)
}

/// Choice id for an option and order index.
pub fn choice_id(option_id: u32, order_index: u32) -> u32 {
    option_id * 100 + order_index
}

fn indexed_option(id: u32, name: &str, count: u32) -> Value {
    let choices: Vec<Value> = (0..count)
        .map(|index| {
            json!({
                "Id": choice_id(id, index),
                "Name": format!("{name} {index}"),
                "OrderIndex": index,
            })
        })
        .collect();

    json!({ "Id": id, "Name": name, "Choices": choices })
}

fn named_option(id: u32, name: &str, choices: &[&str]) -> Value {
    let choices: Vec<Value> = choices
        .iter()
        .enumerate()
        .map(|(index, choice)| {
            json!({
                "Id": choice_id(id, index as u32),
                "Name": choice,
                "OrderIndex": index,
            })
        })
        .collect();

    json!({ "Id": id, "Name": name, "Choices": choices })
}

fn document(race: u8, gender: u8) -> Value {
    let mut options: Vec<Value> = COMMON_OPTIONS
        .iter()
        .enumerate()
        .map(|(index, name)| indexed_option(index as u32 + 1, name, 12))
        .collect();

    if race == 1 && gender == 0 {
        options.push(named_option(10, "Mustache", &["None", "Horseshoe", "Brush"]));
        options.push(named_option(
            11,
            "Beard",
            &["None", "Short", "Chin Puff", "Soul Patch", "Goatee"],
        ));
        options.push(named_option(12, "Sideburns", &["None", "Medium", "Long"]));
        options.push(named_option(13, "Eyebrows", &["Natural", "Thin"]));
        options.push(named_option(14, "Face Shape", &["Narrow", "Wide"]));
    }
    if race == 1 && gender == 1 {
        options.push(indexed_option(20, "Piercings", 4));
        options.push(named_option(13, "Eyebrows", &["Natural", "Thin"]));
        options.push(named_option(14, "Face Shape", &["Narrow", "Wide"]));
        options.push(named_option(21, "Makeup", &["None", "Light"]));
        options.push(named_option(22, "Necklace", &["None", "Pearls"]));
    }
    if race == 4 || race == 6 {
        options.push(indexed_option(30, "Bear Form", 3));
        options.push(indexed_option(31, "Cat Form", 3));
    }

    json!({ "Options": options })
}

/// Writes one document per (race, gender) under `<dir>/meta/charactercustomization2`.
///
/// # Arguments
/// - `dir` - Data directory root
///
/// # Returns
/// - `Ok(())` - Documents written
/// - `Err(TestError)` - Failed to create the directory, serialize or write a document
pub fn write_documents(dir: &Path) -> Result<(), TestError> {
    let target = dir.join("meta").join("charactercustomization2");
    std::fs::create_dir_all(&target)?;

    for race in RACES {
        for gender in GENDERS {
            let contents = serde_json::to_vec_pretty(&document(race, gender))?;
            std::fs::write(target.join(format!("{race}_{gender}.json")), contents)?;
        }
    }

    Ok(())
}

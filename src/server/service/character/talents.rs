//! Talent specs, talent trees and glyphs of the talents page.

use std::collections::HashMap;

use crate::{
    model::character::{TalentSpellDto, TalentTreeDto},
    server::{
        dbc::{catalog::DbcCatalog, table::TalentRow},
        error::dbc::DbcError,
        util::game::spell_icon_name,
    },
};

const PRIMARY_SPEC: u8 = 1;
const SECONDARY_SPEC: u8 = 2;

/// Spell icon id to normalized icon name.
pub async fn spell_icon_names(dbc: &DbcCatalog) -> Result<HashMap<i64, String>, DbcError> {
    Ok(dbc
        .spell_icon()
        .map(|row| (row.id, spell_icon_name(&row.texture_filename)))
        .collect()
        .await?
        .into_iter()
        .collect())
}

/// Splits learned talent spells by spec mask: bit 1 is the primary spec, bit 2 the
/// secondary spec.
pub fn split_specs(talents: &[entity::character_talent::Model]) -> [Vec<u32>; 2] {
    let mut specs = [Vec::new(), Vec::new()];

    for talent in talents {
        if talent.spec_mask & PRIMARY_SPEC != 0 {
            specs[0].push(talent.spell);
        }
        if talent.spec_mask & SECONDARY_SPEC != 0 {
            specs[1].push(talent.spell);
        }
    }

    specs
}

/// Talent trees of a class with the icon of each tree and talent.
///
/// A tree belongs to the class when its class mask is exactly `2^(class - 1)`. Talents
/// keep extract order; a talent whose first rank spell or icon is unknown gets an empty
/// icon.
///
/// # Arguments
/// - `dbc` - Reference data catalog
/// - `class` - Character class id
///
/// # Returns
/// - `Ok(Vec<TalentTreeDto>)` - Trees in extract order, empty for an unknown class
/// - `Err(DbcError)` - An extract could not be read
pub async fn talent_trees(dbc: &DbcCatalog, class: u8) -> Result<Vec<TalentTreeDto>, DbcError> {
    let Some(class_mask) = class.checked_sub(1).map(|bit| 1i64 << bit) else {
        return Ok(Vec::new());
    };

    let tabs = dbc
        .talent_tab()
        .filter(move |tab| tab.class_mask == class_mask)
        .collect()
        .await?;
    if tabs.is_empty() {
        return Ok(Vec::new());
    }

    let icons = spell_icon_names(dbc).await?;
    let spell_icons: HashMap<i64, i64> = dbc
        .spell()
        .map(|spell| (spell.id, spell.spell_icon_id))
        .collect()
        .await?
        .into_iter()
        .collect();
    let talents = dbc.talent().collect().await?;

    let talent_icon = |talent: &TalentRow| {
        spell_icons
            .get(&talent.spell_rank0)
            .and_then(|icon| icons.get(icon))
            .cloned()
            .unwrap_or_default()
    };

    Ok(tabs
        .into_iter()
        .map(|tab| TalentTreeDto {
            icon: icons.get(&tab.spell_icon_id).cloned().unwrap_or_default(),
            spells: talents
                .iter()
                .filter(|talent| talent.tab_id == tab.id)
                .map(|talent| talent_spell_dto(talent, talent_icon(talent)))
                .collect(),
            name: tab.name_lang0,
        })
        .collect())
}

fn talent_spell_dto(talent: &TalentRow, icon: String) -> TalentSpellDto {
    TalentSpellDto {
        id: talent.id,
        tab_id: talent.tab_id,
        tier_id: talent.tier_id,
        column_index: talent.column_index,
        spell_rank0: talent.spell_rank0,
        spell_rank1: talent.spell_rank1,
        spell_rank2: talent.spell_rank2,
        spell_rank3: talent.spell_rank3,
        spell_rank4: talent.spell_rank4,
        prereq_talent0: talent.prereq_talent0,
        prereq_rank0: talent.prereq_rank0,
        icon,
    }
}

/// Glyph spell ids per talent group.
///
/// Empty sockets and glyph ids missing from the extract are skipped, as are rows of a
/// talent group other than 0 and 1.
pub async fn glyph_spells(
    dbc: &DbcCatalog,
    rows: &[entity::character_glyphs::Model],
) -> Result<[Vec<i64>; 2], DbcError> {
    let mut glyphs = [Vec::new(), Vec::new()];
    if rows.is_empty() {
        return Ok(glyphs);
    }

    let spells: HashMap<i64, i64> = dbc
        .glyph_properties()
        .map(|glyph| (glyph.id, glyph.spell_id))
        .collect()
        .await?
        .into_iter()
        .collect();

    for row in rows {
        let Some(group) = glyphs.get_mut(row.talent_group as usize) else {
            continue;
        };
        let sockets = [
            row.glyph1, row.glyph2, row.glyph3, row.glyph4, row.glyph5, row.glyph6,
        ];

        group.extend(
            sockets
                .into_iter()
                .filter(|glyph| *glyph != 0)
                .filter_map(|glyph| spells.get(&(glyph as i64)).copied()),
        );
    }

    Ok(glyphs)
}

use test_utils::fixture::{
    customization::{choice_id, option_id},
    dbc::{
        ENCHANT_GEM, ENCHANT_SOCKET_BONUS, ENCHANT_WEAPON, ITEM_GEM, ITEM_GUILD_TABARD, ITEM_SWORD,
        SPELL_MOUNT, SPELL_MOUNT_UNLISTED,
    },
};

use super::*;
use crate::model::character::{CustomizationChoiceDto, MountDto};

/// Tests the full character page of a geared human warrior.
///
/// Expected: Ok with sheet, equipment in slot order, model items, resolved
/// customization and the listed mount only
#[tokio::test]
async fn builds_character_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let character = factory::character::CharacterFactory::new(db)
        .name("Varian")
        .race(1)
        .class(1)
        .gender(0)
        .appearance(2, 3, 1, 4, 4)
        .online(true)
        .build()
        .await?;
    let guild = factory::guild::GuildFactory::new(db)
        .name("Stormwind Guard")
        .leader(character.guid)
        .build()
        .await?;
    factory::create_guild_member(db, guild.guildid, character.guid, 0).await?;

    let enchantments = format!("{ENCHANT_WEAPON} 0 0 {ENCHANT_GEM} 0 0 {ENCHANT_SOCKET_BONUS} 0 0");
    factory::create_equipped_item(db, character.guid, 18, ITEM_GUILD_TABARD, "").await?;
    factory::create_equipped_item(db, character.guid, 15, ITEM_SWORD, enchantments).await?;
    factory::create_equipped_item(db, character.guid, 3, 2105, "").await?;
    factory::progress::create_character_spell(db, character.guid, SPELL_MOUNT).await?;
    factory::progress::create_character_spell(db, character.guid, SPELL_MOUNT_UNLISTED).await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_character("Varian").await.unwrap();

    assert_eq!(page.sheet.title, "Armory - Varian");
    assert_eq!(page.sheet.realm, REALM);
    assert_eq!(page.sheet.race.as_deref(), Some("Human"));
    assert_eq!(page.sheet.class.as_deref(), Some("Warrior"));
    assert_eq!(page.sheet.guild.as_deref(), Some("Stormwind Guard"));
    assert!(page.sheet.online);

    let slots: Vec<u8> = page.data.equipment.iter().map(|item| item.slot).collect();
    assert_eq!(slots, vec![3, 15, 18]);
    let sword = &page.data.equipment[1];
    assert_eq!(sword.gems, vec![ITEM_GEM as i64]);
    assert_eq!(sword.enchantments, vec![ENCHANT_WEAPON as i64]);
    assert_eq!(sword.icon.as_deref(), Some("INV_Sword_39"));

    assert_eq!(
        page.data.character_model_items,
        vec![[4, 120002], [21, 120001]]
    );

    let pair = |name: &str, index: u32| {
        let option = option_id(name).unwrap();
        CustomizationChoiceDto {
            option_id: option,
            choice_id: choice_id(option, index),
        }
    };
    let options = &page.data.customization_options;
    assert_eq!(
        options[..4],
        [
            pair("Face", 3),
            pair("Skin Color", 2),
            pair("Hair Style", 1),
            pair("Hair Color", 4),
        ]
    );
    // Facial style 4 is a brush mustache with a goatee and long sideburns.
    assert!(options.contains(&CustomizationChoiceDto {
        option_id: 10,
        choice_id: 1002,
    }));
    assert!(options.contains(&CustomizationChoiceDto {
        option_id: 11,
        choice_id: 1104,
    }));
    assert!(options.contains(&CustomizationChoiceDto {
        option_id: 5,
        choice_id: 4136,
    }));

    assert_eq!(
        page.data.mounts,
        vec![MountDto {
            creature_display_id: 25280,
            spell: SPELL_MOUNT as i64,
            icon: "spell_deathknight_summondeathcharger".to_string(),
        }]
    );

    Ok(())
}

/// Tests that character names match regardless of case.
///
/// Expected: Ok with the stored spelling of the name
#[tokio::test]
async fn finds_character_case_insensitively() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    factory::create_character_named(db, "Jaina").await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_character("jAINA").await.unwrap();

    assert_eq!(page.sheet.name, "Jaina");
    assert!(page.data.equipment.is_empty());
    assert!(page.data.mounts.is_empty());

    Ok(())
}

/// Tests the death knight eye color override on the character page.
///
/// Expected: Ok with the death knight eye color choice in place of the default
#[tokio::test]
async fn death_knight_eyes_override_default() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    factory::character::CharacterFactory::new(db)
        .name("Arthas")
        .class(6)
        .build()
        .await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_character("Arthas").await.unwrap();

    let eyes: Vec<&CustomizationChoiceDto> = page
        .data
        .customization_options
        .iter()
        .filter(|option| option.option_id == 5)
        .collect();
    assert_eq!(
        eyes,
        vec![&CustomizationChoiceDto {
            option_id: 5,
            choice_id: 4534,
        }]
    );

    Ok(())
}

/// Tests the character page of a race that has no customization document.
///
/// Expected: Ok with an empty customization option list
#[tokio::test]
async fn race_without_customization_document_has_no_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    factory::character::CharacterFactory::new(db)
        .name("Gazlowe")
        .race(9)
        .class(1)
        .build()
        .await?;

    let service = CharacterService::new(&armory.state, armory.realm());
    let page = service.get_character("Gazlowe").await.unwrap();

    assert!(page.data.customization_options.is_empty());
    assert_eq!(page.data.race, 9);

    Ok(())
}

/// Tests the character page of an unknown name.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn unknown_character_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let armory = armory(db, false).await;

    let service = CharacterService::new(&armory.state, armory.realm());
    let result = service.get_character("Nobody").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that game master characters disappear only when hiding is enabled.
///
/// Expected: NotFound while hiding, Ok otherwise
#[tokio::test]
async fn hides_game_masters_when_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_armory_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let character = factory::create_character_named(db, "Gamemaster").await?;
    factory::account::create_account_access(db, character.account, 3, REALM_ID).await?;

    let hidden = armory(db, true).await;
    let result = CharacterService::new(&hidden.state, hidden.realm())
        .get_character("Gamemaster")
        .await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    let shown = armory(db, false).await;
    let page = CharacterService::new(&shown.state, shown.realm())
        .get_character("Gamemaster")
        .await
        .unwrap();
    assert_eq!(page.sheet.name, "Gamemaster");

    Ok(())
}

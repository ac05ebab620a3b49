use std::fs;
use std::path::PathBuf;

use combat_content::{BossLoader, ContentFactory, HazardLoader, StatusLoader};
use combat_core::{
    AbilityBehavior, AbilityKind, AbilityOracle, BossAbility, BossId, BossOracle, BossPhase,
    Difficulty, Element, ElementalOracle, HazardKind, StatusEffectKind, StatusTemplates,
};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../../data")
}

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn shipped_bundle_loads() {
    let bundle = ContentFactory::new(data_dir()).load_bundle().unwrap();

    assert_eq!(bundle.config.combo.max_combo, 10);
    assert_eq!(bundle.difficulty.default_difficulty(), Difficulty::Normal);
    assert_eq!(bundle.difficulty.get(Difficulty::Hard).enemy_damage, 1.25);
    assert_eq!(
        bundle.elements.damage_multiplier(Element::Fire, Element::Ice),
        1.5
    );
    assert_eq!(
        bundle.abilities.profile(AbilityKind::MindControl).unwrap().mana_cost,
        20
    );
    assert_eq!(bundle.status_templates.len(), StatusTemplates::standard().len());
    assert_eq!(bundle.hazards.len(), 5);

    let queen = bundle.bosses.definition(&BossId::from("frost_queen")).unwrap();
    let phase2 = queen.phase(BossPhase::Phase2).unwrap();
    assert_eq!(phase2.invulnerable_turns, 2);
    assert!(phase2.activates_hazard);
    assert_eq!(
        bundle.boss_abilities.behavior(BossAbility::SummonMinions),
        Some(AbilityBehavior::Summon { count: 3 })
    );
}

#[test]
fn bundle_builds_a_working_boss_machine() {
    let bundle = ContentFactory::new(data_dir()).load_bundle().unwrap();
    let mut encounters = bundle.boss_encounters();
    let id = BossId::from("ember_tyrant");

    encounters.start(&id).unwrap();
    assert_eq!(encounters.current_phase(&id), Some(BossPhase::Phase1));
    assert!(bundle.status_engine().templates().get(StatusEffectKind::Burning).is_some());
}

#[test]
fn boss_without_phase_one_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "bosses.ron",
        r#"(
            bosses: [(
                id: "lich",
                name: "Lich",
                stats: (strength: 10, agility: 5, magic_power: 20),
                max_health: 100,
                phases: [(phase: Phase2, health_threshold: 0.5, abilities: [])],
            )],
        )"#,
    );

    let err = BossLoader::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Phase1"));
}

#[test]
fn duplicate_boss_ids_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let boss = r#"(
        id: "lich",
        name: "Lich",
        stats: (strength: 10, agility: 5, magic_power: 20),
        max_health: 100,
        phases: [(phase: Phase1, health_threshold: 1.0, abilities: [LifeDrain])],
    )"#;
    let path = write(&dir, "bosses.ron", &format!("(bosses: [{boss}, {boss}])"));

    assert!(BossLoader::load(&path).is_err());
}

#[test]
fn threshold_outside_unit_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "bosses.ron",
        r#"(
            bosses: [(
                id: "lich",
                name: "Lich",
                stats: (strength: 10, agility: 5, magic_power: 20),
                max_health: 100,
                phases: [(phase: Phase1, health_threshold: 1.5, abilities: [])],
            )],
        )"#,
    );

    assert!(BossLoader::load(&path).is_err());
}

#[test]
fn severer_phase_with_higher_threshold_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "bosses.ron",
        r#"(
            bosses: [(
                id: "lich",
                name: "Lich",
                stats: (strength: 10, agility: 5, magic_power: 20),
                max_health: 100,
                phases: [
                    (phase: Phase1, health_threshold: 1.0, abilities: []),
                    (phase: Phase2, health_threshold: 0.3, abilities: []),
                    (phase: Phase3, health_threshold: 0.6, abilities: []),
                ],
            )],
        )"#,
    );

    let err = BossLoader::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Phase3 threshold 0.6"));
}

#[test]
fn inverted_hazard_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        &dir,
        "hazards.ron",
        "(hazards: [(kind: LavaPools, min: 10, max: 5)])",
    );

    let err = HazardLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains(&HazardKind::LavaPools.to_string()));
}

#[test]
fn status_overrides_keep_untouched_templates() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(&dir, "status.ron", "{ Poisoned: (tick_per_potency: 7, class: Debuff) }");

    let templates = StatusLoader::load(&path).unwrap();
    assert_eq!(templates.get(StatusEffectKind::Poisoned).unwrap().tick_per_potency, 7);
    assert_eq!(
        templates.get(StatusEffectKind::Burning),
        StatusTemplates::standard().get(StatusEffectKind::Burning)
    );
}

#[test]
fn missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = ContentFactory::new(dir.path()).load_bundle().unwrap_err();
    assert!(err.to_string().contains("bosses.ron"));
}

use combat_core::{
    BossAbility, BossCatalog, BossDefinition, BossEncounters, BossId, BossPhase, BossPhaseConfig,
    Combatant, EffectiveStats, Participant, ParticipantId, SequenceRng,
};

fn catalog() -> BossCatalog {
    BossCatalog::new([BossDefinition::new(
        "frost_queen",
        "Frost Queen",
        EffectiveStats::new(30, 8, 25),
        800,
    )
    .with_phase(
        BossPhaseConfig::new(BossPhase::Phase1, 1.0)
            .with_abilities([BossAbility::LifeDrain, BossAbility::StatusCurse]),
    )
    .with_phase(
        BossPhaseConfig::new(BossPhase::Phase2, 0.66)
            .with_multipliers(1.2, 1.1)
            .with_abilities([BossAbility::LifeDrain, BossAbility::AreaOfEffect])
            .with_minions(2, "ice_wraith")
            .with_hazard()
            .with_invulnerability(2)
            .with_narration("The air freezes solid."),
    )
    .with_phase(
        BossPhaseConfig::new(BossPhase::Phase3, 0.33)
            .with_multipliers(1.5, 1.25)
            .with_abilities([BossAbility::EnrageMode, BossAbility::UltimateAttack])
            .with_hazard(),
    )])
}

fn queen() -> BossId {
    BossId::from("frost_queen")
}

fn hero() -> Combatant {
    Combatant::new(ParticipantId(1), "Hero", EffectiveStats::new(15, 10, 10))
        .with_health(250)
        .with_mana(40)
}

#[test]
fn phase_two_fires_side_effects_once() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    bosses.start(&queen()).unwrap();

    let update = bosses.update_phase(&queen(), 0.70, &mut rng).unwrap();
    assert_eq!(update.phase(), BossPhase::Phase1);
    assert!(!update.changed());

    let update = bosses.update_phase(&queen(), 0.60, &mut rng).unwrap();
    assert_eq!(update.phase(), BossPhase::Phase2);
    let transition = update.transition.unwrap();
    assert_eq!(transition.from, BossPhase::Phase1);
    assert!(transition.hazard.is_some());
    assert_eq!(transition.invulnerable_turns, 2);
    assert_eq!(transition.minions.map(|m| m.count), Some(2));

    let state = bosses.state(&queen()).unwrap();
    assert_eq!(state.hazards().len(), 1);
    assert_eq!(state.transitions(), 1);
    assert!(state.is_invulnerable());

    let again = bosses.update_phase(&queen(), 0.60, &mut rng).unwrap();
    assert_eq!(again.phase(), BossPhase::Phase2);
    assert!(again.transition.is_none());
    let state = bosses.state(&queen()).unwrap();
    assert_eq!(state.hazards().len(), 1);
    assert_eq!(state.transitions(), 1);
}

#[test]
fn phase_never_reverts_after_healing() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    bosses.start(&queen()).unwrap();

    bosses.update_phase(&queen(), 0.50, &mut rng).unwrap();
    bosses.update_phase(&queen(), 0.20, &mut rng).unwrap();
    assert_eq!(bosses.current_phase(&queen()), Some(BossPhase::Phase3));

    for fraction in [0.5, 0.9, 1.0] {
        let update = bosses.update_phase(&queen(), fraction, &mut rng).unwrap();
        assert_eq!(update.phase(), BossPhase::Phase3);
    }
}

#[test]
fn one_phase_per_update() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    bosses.start(&queen()).unwrap();

    let update = bosses.update_phase(&queen(), 0.10, &mut rng).unwrap();
    assert_eq!(update.phase(), BossPhase::Phase2);
    let update = bosses.update_phase(&queen(), 0.10, &mut rng).unwrap();
    assert_eq!(update.phase(), BossPhase::Phase3);
    assert_eq!(bosses.state(&queen()).unwrap().hazards().len(), 1);
}

#[test]
fn phase_hazards_end_with_their_phase() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    bosses.start(&queen()).unwrap();

    let update = bosses
        .update_phase(&queen(), 0.60, &mut SequenceRng::constant(0.0))
        .unwrap();
    let phase_two_hazard = update.transition.unwrap().hazard.unwrap();
    bosses
        .execute_ability(
            &queen(),
            BossAbility::EnvironmentalHazard,
            &mut hero(),
            &mut SequenceRng::constant(0.0),
        )
        .unwrap();
    assert_eq!(bosses.state(&queen()).unwrap().hazards().len(), 2);

    let update = bosses
        .update_phase(&queen(), 0.20, &mut SequenceRng::constant(0.99))
        .unwrap();
    assert_eq!(update.phase(), BossPhase::Phase3);
    let phase_three_hazard = update.transition.unwrap().hazard.unwrap();

    let hazards = bosses.state(&queen()).unwrap().hazards();
    assert_eq!(hazards.len(), 1);
    assert!(hazards.contains(&phase_three_hazard));
    assert!(!hazards.contains(&phase_two_hazard));
}

#[test]
fn ultimate_deals_forty_percent_and_spends_charge() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    bosses.start(&queen()).unwrap();

    for turn in 1..=5 {
        assert!(!bosses.can_use_ultimate(&queen()), "turn {turn}");
        bosses.process_boss_turn(&queen()).unwrap();
    }
    assert!(bosses.can_use_ultimate(&queen()));

    let mut target = hero();
    let outcome = bosses
        .execute_ability(&queen(), BossAbility::UltimateAttack, &mut target, &mut rng)
        .unwrap();
    assert_eq!(outcome.damage, 100);
    assert_eq!(target.health().current, 150);
    assert_eq!(bosses.state(&queen()).unwrap().ultimate_charge(), 0);
    assert!(!bosses.can_use_ultimate(&queen()));
}

#[test]
fn life_drain_deals_fifteen_percent() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    bosses.start(&queen()).unwrap();
    let mut target = Combatant::new(ParticipantId(3), "Bard", EffectiveStats::default())
        .with_health(100);

    let outcome = bosses
        .execute_ability(
            &queen(),
            BossAbility::LifeDrain,
            &mut target,
            &mut SequenceRng::constant(0.0),
        )
        .unwrap();
    assert_eq!(outcome.damage, 15);
    assert_eq!(target.health().current, 85);
}

#[test]
fn environmental_damage_persists_hazards() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    bosses.start(&queen()).unwrap();
    bosses.update_phase(&queen(), 0.5, &mut rng).unwrap();

    let mut target = hero();
    let first = bosses
        .process_environmental_damage(&queen(), &mut target, &mut rng)
        .unwrap();
    let second = bosses
        .process_environmental_damage(&queen(), &mut target, &mut rng)
        .unwrap();
    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert_eq!(bosses.state(&queen()).unwrap().hazards().len(), 1);

    let ended = bosses.end(&queen()).unwrap();
    assert_eq!(ended.hazards().len(), 1);
    assert!(bosses.state(&queen()).is_none());
}

#[test]
fn unknown_boss_is_reported_not_panicked() {
    let mut bosses = BossEncounters::with_standard_tables(catalog());
    let mut rng = SequenceRng::constant(0.0);
    let ghost = BossId::from("ghost");

    assert!(bosses.start(&ghost).is_err());
    assert!(bosses.update_phase(&ghost, 0.5, &mut rng).is_err());
    let err = bosses
        .execute_ability(&ghost, BossAbility::LifeDrain, &mut hero(), &mut rng)
        .unwrap_err();
    assert!(err.to_string().contains("ghost"));
    assert!(!bosses.can_use_ultimate(&ghost));
    assert_eq!(bosses.damage_multiplier(&ghost), 1.0);
}

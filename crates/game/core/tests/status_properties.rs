use combat_core::{
    Combatant, EffectiveStats, Participant, ParticipantId, StatusEffectEngine, StatusEffectKind,
};

fn target() -> Combatant {
    Combatant::new(ParticipantId(5), "Squire", EffectiveStats::new(10, 10, 10)).with_health(100)
}

// Ticks land before the decrement, so the third call still deals damage.
#[test]
fn burning_ticks_three_times_then_expires() {
    let mut engine = StatusEffectEngine::standard();
    let mut squire = target();
    engine
        .apply_effect(squire.id(), StatusEffectKind::Burning, 3, 1)
        .unwrap();

    assert_eq!(engine.process_turn_start(&mut squire), 5);
    assert!(engine.can_act(squire.id()) && engine.can_use_magic(squire.id()));
    assert_eq!(engine.process_turn_start(&mut squire), 5);
    assert!(engine.has_effect(squire.id(), StatusEffectKind::Burning));
    assert!(engine.can_act(squire.id()) && engine.can_use_magic(squire.id()));

    assert_eq!(engine.process_turn_start(&mut squire), 5);
    assert!(!engine.has_effect(squire.id(), StatusEffectKind::Burning));
    assert!(engine.can_act(squire.id()) && engine.can_use_magic(squire.id()));
    assert_eq!(squire.health().current, 85);

    assert_eq!(engine.process_turn_start(&mut squire), 0);
}

#[test]
fn reapplying_never_duplicates() {
    let mut engine = StatusEffectEngine::standard();
    let holder = ParticipantId(5);
    for (duration, potency) in [(2, 1), (4, 1), (1, 3), (3, 2)] {
        engine
            .apply_effect(holder, StatusEffectKind::Poisoned, duration, potency)
            .unwrap();
    }
    assert_eq!(engine.effects(holder).len(), 1);
    let effect = engine.effect(holder, StatusEffectKind::Poisoned).unwrap();
    assert_eq!(effect.remaining(), 4);
    assert_eq!(effect.potency(), 3);
}

#[test]
fn turn_start_decrements_every_effect_by_one() {
    let mut engine = StatusEffectEngine::standard();
    let mut squire = target();
    let id = squire.id();
    engine.apply_effect(id, StatusEffectKind::Stunned, 1, 1).unwrap();
    engine.apply_effect(id, StatusEffectKind::Weakened, 2, 1).unwrap();
    engine.apply_effect(id, StatusEffectKind::Shielded, 5, 1).unwrap();
    assert!(!engine.can_act(id));

    engine.process_turn_start(&mut squire);

    assert!(!engine.has_effect(id, StatusEffectKind::Stunned));
    assert_eq!(engine.effect(id, StatusEffectKind::Weakened).unwrap().remaining(), 1);
    assert_eq!(engine.effect(id, StatusEffectKind::Shielded).unwrap().remaining(), 4);
    assert!(engine.can_act(id));
}

#[test]
fn holders_are_independent() {
    let mut engine = StatusEffectEngine::standard();
    engine
        .apply_effect(ParticipantId(1), StatusEffectKind::Silenced, 2, 1)
        .unwrap();
    assert!(!engine.can_use_magic(ParticipantId(1)));
    assert!(engine.can_use_magic(ParticipantId(2)));
    assert_eq!(engine.clear_holder(ParticipantId(1)), 1);
    assert!(engine.can_use_magic(ParticipantId(1)));
}

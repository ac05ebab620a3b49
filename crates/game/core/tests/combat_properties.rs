use combat_core::{
    AbilityKind, AbilityTable, CombatConfig, CombatEnv, ComboTracker, Combatant, DifficultyTable,
    EffectiveStats, ElementChart, Participant, ParticipantId, SequenceRng, Side, SynergyBonuses,
};

struct Providers {
    difficulty: DifficultyTable,
    chart: ElementChart,
    synergy: SynergyBonuses,
    abilities: AbilityTable,
    config: CombatConfig,
}

impl Providers {
    fn standard() -> Self {
        Self {
            difficulty: DifficultyTable::default(),
            chart: ElementChart::standard(),
            synergy: SynergyBonuses::uninitialized(),
            abilities: AbilityTable::standard(),
            config: CombatConfig::default(),
        }
    }

    fn resolver(&self) -> combat_core::DamageResolver<'_> {
        let env = CombatEnv::with_all(
            &self.difficulty,
            &self.chart,
            &self.synergy,
            &self.abilities,
        );
        combat_core::DamageResolver::new(env, &self.config)
    }
}

fn attacker() -> Combatant {
    Combatant::new(ParticipantId(1), "Knight", EffectiveStats::new(20, 10, 12))
        .with_mana(40)
        .with_abilities([AbilityKind::Fireball, AbilityKind::MindControl])
}

fn defender(agility: u32) -> Combatant {
    Combatant::new(ParticipantId(2), "Goblin", EffectiveStats::new(8, agility, 0)).with_health(200)
}

#[test]
fn physical_hit_then_combo_hit() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::new(providers.config.combo);
    // 0.5 never crits (10%), never dodges agility 0, and gives variance 1.0
    let mut rng = SequenceRng::constant(0.5);
    let (knight, goblin) = (attacker(), defender(0));

    let first = resolver.physical_attack(&mut combo, &mut rng, &knight, &goblin, Side::Player);
    assert_eq!(first.damage, 20);
    assert!(!first.is_critical());

    let second = resolver.physical_attack(&mut combo, &mut rng, &knight, &goblin, Side::Player);
    assert_eq!(second.damage, 22);
    assert_eq!(combo.streak(), 2);
}

#[test]
fn dodge_zeroes_damage_and_resets_combo() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::new(providers.config.combo);
    let (knight, goblin) = (attacker(), defender(30));

    resolver.physical_attack(
        &mut combo,
        &mut SequenceRng::constant(0.5),
        &knight,
        &goblin,
        Side::Player,
    );
    assert_eq!(combo.streak(), 1);

    // crit roll, then a dodge roll under the 30% dodge chance
    let mut rng = SequenceRng::new([0.9, 0.1]);
    let result = resolver.physical_attack(&mut combo, &mut rng, &knight, &goblin, Side::Player);
    assert_eq!(result.damage, 0);
    assert!(result.was_dodged());
    assert_eq!(combo.streak(), 0);
    assert_eq!(combo.total_hits(), 0);
    // variance is never drawn after a dodge
    assert_eq!(rng.draws(), 2);
}

#[test]
fn dodge_chance_is_capped() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::default();
    let (knight, goblin) = (attacker(), defender(500));

    // 0.45 sits above the 40% cap, so the attack lands despite huge agility
    let mut rng = SequenceRng::new([0.9, 0.45, 0.5]);
    let result = resolver.physical_attack(&mut combo, &mut rng, &knight, &goblin, Side::Player);
    assert!(!result.was_dodged());
    assert_eq!(result.damage, 20);
}

#[test]
fn consecutive_hits_cap_streak_and_count_cascades() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::new(providers.config.combo);
    let mut rng = SequenceRng::constant(0.5);
    let (knight, goblin) = (attacker(), defender(0));

    for hit in 1..=12u32 {
        resolver.physical_attack(&mut combo, &mut rng, &knight, &goblin, Side::Player);
        assert_eq!(combo.streak(), hit.min(providers.config.combo.max_combo));
        assert_eq!(combo.total_hits(), hit);
        assert_eq!(combo.is_cascade(), hit % 5 == 0);
    }
}

#[test]
fn magic_attack_with_insufficient_mana_changes_nothing() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::default();
    let mut caster = attacker().with_mana(15);
    let target = defender(0);

    // MindControl costs 20
    let result = resolver.magic_attack(
        &mut combo,
        &mut SequenceRng::constant(0.5),
        &mut caster,
        &target,
        AbilityKind::MindControl,
        Side::Player,
    );
    assert_eq!(result.damage, 0);
    assert!(result.is_invalid());
    assert_eq!(caster.current_mana(), 15);
    assert_eq!(combo.streak(), 0);
}

#[test]
fn magic_attack_spends_mana_and_may_offer_status() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::default();
    let mut caster = attacker();
    let target = defender(0);

    // crit, dodge, variance, then a status roll under 25%
    let mut rng = SequenceRng::new([0.9, 0.9, 0.5, 0.1]);
    let result = resolver.magic_attack(
        &mut combo,
        &mut rng,
        &mut caster,
        &target,
        AbilityKind::Fireball,
        Side::Player,
    );
    // 12 magic power × 1.5, neutral defender
    assert_eq!(result.damage, 18);
    assert_eq!(caster.current_mana(), 30);
    let status = result.applied_status.expect("fireball should offer a status");
    assert_eq!(status.kind, combat_core::StatusEffectKind::Burning);
}

#[test]
fn enemy_attacks_use_enemy_scaling() {
    let mut providers = Providers::standard();
    providers.difficulty = DifficultyTable::preset(combat_core::Difficulty::Hard);
    let resolver = providers.resolver();
    let mut combo = ComboTracker::default();

    let result = resolver.physical_attack(
        &mut combo,
        &mut SequenceRng::constant(0.5),
        &attacker(),
        &defender(0),
        Side::Enemy,
    );
    assert_eq!(result.damage, 25);
}

#[test]
fn defeated_defender_yields_invalid_result() {
    let providers = Providers::standard();
    let resolver = providers.resolver();
    let mut combo = ComboTracker::default();
    let mut goblin = defender(0);
    goblin.take_damage(1_000).unwrap();

    let result = resolver.physical_attack(
        &mut combo,
        &mut SequenceRng::constant(0.5),
        &attacker(),
        &goblin,
        Side::Player,
    );
    assert!(result.is_invalid());
    assert_eq!(result.damage, 0);
}

#[cfg(test)]
mod tests {
    use crate::combat::{resolve_damage, type_advantage, type_profile, Combatant};
    use crate::commands::{BattleCommand, UnitSpec};
    use crate::enums::*;
    use crate::events::{BattleEvent, BattleEventKind, EventTag};
    use crate::types::{Position, SimTime, UnitId};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_unit_type_serde() {
        let variants = vec![
            UnitType::MeleeInfantry,
            UnitType::RangedInfantry,
            UnitType::Cavalry,
            UnitType::Siege,
            UnitType::Caster,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: UnitType = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_formation_stance_serde() {
        for f in [
            Formation::Line,
            Formation::Wedge,
            Formation::Square,
            Formation::Skirmish,
        ] {
            let json = serde_json::to_string(&f).unwrap();
            let back: Formation = serde_json::from_str(&json).unwrap();
            assert_eq!(f, back);
        }
        for s in [Stance::Aggressive, Stance::Balanced, Stance::Defensive] {
            let json = serde_json::to_string(&s).unwrap();
            let back: Stance = serde_json::from_str(&json).unwrap();
            assert_eq!(s, back);
        }
    }

    #[test]
    fn test_battle_phase_serde() {
        for p in [
            BattlePhase::Preparation,
            BattlePhase::Battle,
            BattlePhase::Ended,
        ] {
            let json = serde_json::to_string(&p).unwrap();
            let back: BattlePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(p, back);
        }
    }

    /// Verify BattleCommand round-trips through serde (tagged union).
    #[test]
    fn test_battle_command_serde() {
        let commands = vec![
            BattleCommand::AddUnit {
                spec: UnitSpec::new(
                    UnitId(1),
                    "1st Spears",
                    UnitType::MeleeInfantry,
                    "north",
                    Position::new(0.0, 0.0),
                    120,
                ),
            },
            BattleCommand::RemoveUnit { unit: UnitId(1) },
            BattleCommand::MoveUnit {
                unit: UnitId(2),
                target: Position::new(50.0, -10.0),
            },
            BattleCommand::AttackTarget {
                unit: UnitId(2),
                target: UnitId(3),
            },
            BattleCommand::SetFormation {
                unit: UnitId(2),
                formation: Formation::Wedge,
            },
            BattleCommand::SetStance {
                unit: UnitId(2),
                stance: Stance::Aggressive,
            },
            BattleCommand::Start,
            BattleCommand::Pause,
            BattleCommand::Resume,
            BattleCommand::Stop,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: BattleCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since BattleCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify BattleEvent round-trips through serde and tags match payloads.
    #[test]
    fn test_battle_event_serde() {
        let kinds = vec![
            BattleEventKind::Damage {
                attacker: UnitId(1),
                defender: UnitId(2),
                amount: 42.5,
                casualties: 4,
                ranged: false,
            },
            BattleEventKind::UnitDeath {
                unit: UnitId(2),
                nation: "south".into(),
            },
            BattleEventKind::MoraleBreak {
                unit: UnitId(3),
                morale: 20.0,
            },
            BattleEventKind::UnitRallied { unit: UnitId(3) },
            BattleEventKind::ProjectileMiss {
                projectile: 7,
                target: UnitId(2),
            },
            BattleEventKind::BattleEnded {
                victor: Some("north".into()),
            },
        ];
        let tags = [
            EventTag::Damage,
            EventTag::UnitDeath,
            EventTag::MoraleBreak,
            EventTag::UnitRallied,
            EventTag::ProjectileMiss,
            EventTag::BattleEnded,
        ];
        for (kind, tag) in kinds.into_iter().zip(tags) {
            assert_eq!(kind.tag(), tag);
            let event = BattleEvent {
                id: 9,
                tick: 30,
                elapsed_secs: 1.0,
                kind,
            };
            let json = serde_json::to_string(&event).unwrap();
            let back: BattleEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    // ---- Position / time ----

    #[test]
    fn test_position_step_toward() {
        let from = Position::new(0.0, 0.0);
        let to = Position::new(0.0, 100.0);

        let step = from.step_toward(&to, 10.0);
        assert!((step.y - 10.0).abs() < 1e-9);
        assert!((step.x).abs() < 1e-9);

        // Never overshoots.
        let arrive = from.step_toward(&to, 500.0);
        assert_eq!(arrive, to);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        for _ in 0..crate::constants::TICK_RATE {
            time.advance();
        }
        assert_eq!(time.tick, crate::constants::TICK_RATE as u64);
        assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
    }

    // ---- Damage model properties ----

    fn combatant(unit_type: UnitType) -> Combatant {
        Combatant {
            unit_type,
            ..Combatant::default()
        }
    }

    #[test]
    fn test_damage_always_positive_and_finite() {
        let types = [
            UnitType::MeleeInfantry,
            UnitType::RangedInfantry,
            UnitType::Cavalry,
            UnitType::Siege,
            UnitType::Caster,
        ];
        for &a in &types {
            for &d in &types {
                let attacker = combatant(a);
                let defender = combatant(d);
                let dmg = resolve_damage(&attacker, &defender);
                assert!(dmg.is_finite() && dmg > 0.0, "{a:?} vs {d:?} gave {dmg}");
            }
        }

        // Degenerate attacker: zero troops, zero stats, zero morale.
        let broken = Combatant {
            troops: 0,
            morale: 0.0,
            training: 0.0,
            strength: 0.0,
            ..combatant(UnitType::MeleeInfantry)
        };
        let dmg = resolve_damage(&broken, &combatant(UnitType::MeleeInfantry));
        assert!(dmg.is_finite() && dmg > 0.0, "degenerate attacker gave {dmg}");
    }

    #[test]
    fn test_damage_monotone_in_strength_troops_morale() {
        let defender = combatant(UnitType::MeleeInfantry);
        let base = combatant(UnitType::MeleeInfantry);
        let reference = resolve_damage(&base, &defender);

        let stronger = Combatant {
            strength: base.strength + 10.0,
            ..base
        };
        assert!(resolve_damage(&stronger, &defender) > reference);

        let bigger = Combatant {
            troops: base.troops + 50,
            ..base
        };
        assert!(resolve_damage(&bigger, &defender) > reference);

        let weaker_morale = Combatant {
            morale: base.morale - 40.0,
            ..base
        };
        assert!(resolve_damage(&weaker_morale, &defender) < reference);
    }

    #[test]
    fn test_formation_offense_ordering() {
        let defender = combatant(UnitType::MeleeInfantry);
        let wedge = Combatant {
            formation: Formation::Wedge,
            ..combatant(UnitType::MeleeInfantry)
        };
        let square = Combatant {
            formation: Formation::Square,
            ..combatant(UnitType::MeleeInfantry)
        };
        assert!(resolve_damage(&wedge, &defender) > resolve_damage(&square, &defender));
    }

    #[test]
    fn test_square_defends_better_than_wedge() {
        let attacker = combatant(UnitType::MeleeInfantry);
        let square = Combatant {
            formation: Formation::Square,
            ..combatant(UnitType::MeleeInfantry)
        };
        let wedge = Combatant {
            formation: Formation::Wedge,
            ..combatant(UnitType::MeleeInfantry)
        };
        assert!(resolve_damage(&attacker, &square) <= resolve_damage(&attacker, &wedge));
    }

    #[test]
    fn test_stance_ordering() {
        let defender = combatant(UnitType::MeleeInfantry);
        let aggressive = Combatant {
            stance: Stance::Aggressive,
            ..combatant(UnitType::MeleeInfantry)
        };
        let defensive = Combatant {
            stance: Stance::Defensive,
            ..combatant(UnitType::MeleeInfantry)
        };
        assert!(resolve_damage(&aggressive, &defender) > resolve_damage(&defensive, &defender));
    }

    #[test]
    fn test_status_effect_multipliers() {
        let defender = combatant(UnitType::MeleeInfantry);
        let base = combatant(UnitType::MeleeInfantry);

        let inspired = Combatant {
            effect_attack_mult: 1.5,
            ..base
        };
        assert!(resolve_damage(&inspired, &defender) > resolve_damage(&base, &defender));

        let shielded = Combatant {
            effect_defense_mult: 0.5,
            ..defender
        };
        assert!(resolve_damage(&base, &shielded) < resolve_damage(&base, &defender));
    }

    #[test]
    fn test_type_advantages() {
        let cavalry = combatant(UnitType::Cavalry);
        let ranged = combatant(UnitType::RangedInfantry);
        let melee = combatant(UnitType::MeleeInfantry);
        let siege = combatant(UnitType::Siege);

        // Cavalry strongly favored against ranged infantry.
        let cav_vs_ranged = resolve_damage(&cavalry, &ranged);
        let ranged_vs_cav = resolve_damage(&ranged, &cavalry);
        assert!(cav_vs_ranged > 1.2 * ranged_vs_cav);

        // Melee infantry favored against ranged infantry.
        assert!(resolve_damage(&melee, &ranged) > resolve_damage(&ranged, &melee));

        // Cavalry strongly favored against siege.
        assert!(resolve_damage(&cavalry, &siege) > resolve_damage(&siege, &cavalry));

        // Unlisted matchups are neutral both ways.
        assert_eq!(
            type_advantage(UnitType::Caster, UnitType::Siege),
            type_advantage(UnitType::Siege, UnitType::Caster)
        );
    }

    #[test]
    fn test_type_profiles() {
        // Melee types strike directly; ranged types launch projectiles.
        assert!(type_profile(UnitType::MeleeInfantry).projectile.is_none());
        assert!(type_profile(UnitType::Cavalry).projectile.is_none());
        assert_eq!(
            type_profile(UnitType::RangedInfantry).projectile,
            Some(ProjectileKind::Arrow)
        );
        assert_eq!(
            type_profile(UnitType::Siege).projectile,
            Some(ProjectileKind::Stone)
        );
        assert_eq!(
            type_profile(UnitType::Caster).projectile,
            Some(ProjectileKind::Bolt)
        );

        // Ranged types out-range melee types.
        assert!(
            type_profile(UnitType::RangedInfantry).attack_range
                > type_profile(UnitType::MeleeInfantry).attack_range
        );
    }
}

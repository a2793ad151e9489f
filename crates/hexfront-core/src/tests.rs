#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::events::SimEvent;
    use crate::hex::CubeCoordinate;
    use crate::state::GameStateSnapshot;
    use crate::types::{Position, Rect, SimTime};

    /// PlayerCommand is a tagged union on the wire.
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::ToggleFog,
            PlayerCommand::SetFog { enabled: false },
            PlayerCommand::SelectCell {
                coord: CubeCoordinate::axial(1, -1),
            },
            PlayerCommand::ClearSelection,
            PlayerCommand::MoveSelected {
                to: CubeCoordinate::axial(0, 1),
            },
            PlayerCommand::RepairBuilding {
                coord: CubeCoordinate::ORIGIN,
                amount: 30,
            },
            PlayerCommand::Pause,
            PlayerCommand::Resume,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            assert!(json.contains("\"type\""), "missing tag: {json}");
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    #[test]
    fn test_command_with_invalid_coordinate_is_rejected() {
        let json = r#"{"type":"SelectCell","coord":{"q":1,"r":1,"s":1}}"#;
        let parsed: Result<PlayerCommand, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_sim_event_serde() {
        let event = SimEvent::CharacterKilled {
            character: 7,
            coord: CubeCoordinate::axial(2, -1),
            allegiance: Allegiance::Enemy,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SimEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }

    #[test]
    fn test_allegiance_hostility() {
        assert!(Allegiance::Friendly.is_hostile_to(Allegiance::Enemy));
        assert!(Allegiance::Enemy.is_hostile_to(Allegiance::Neutral));
        assert!(!Allegiance::Enemy.is_hostile_to(Allegiance::Enemy));
        assert!(Allegiance::Friendly.is_friendly());
        assert!(!Allegiance::Neutral.is_friendly());
    }

    #[test]
    fn test_kind_stats() {
        assert_eq!(CharacterKind::Soldier.projectile(), ProjectileKind::Bullet);
        assert_eq!(CharacterKind::Tank.projectile(), ProjectileKind::TankAmmo);
        assert!(CharacterKind::Tank.weapon_range() > CharacterKind::Soldier.weapon_range());
        assert!(CharacterKind::Soldier.max_defenses().is_none());
        assert!(ProjectileKind::TankAmmo.speed() < ProjectileKind::Bullet.speed());
        assert!(ProjectileKind::TankAmmo.damage() > ProjectileKind::Bullet.damage());
        assert!(BuildingKind::Base.sight_radius() > BuildingKind::Farm.sight_radius());
    }

    #[test]
    fn test_rect_intersection() {
        let a = Rect::centered(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::centered(Vec2::new(8.0, 0.0), Vec2::splat(10.0));
        let c = Rect::centered(Vec2::new(20.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
        // Touching edges share no area.
        let d = Rect::centered(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(!a.intersects(&d));
    }

    #[test]
    fn test_rect_new_normalizes_corners() {
        let r = Rect::new(Vec2::new(5.0, 5.0), Vec2::new(-5.0, -5.0));
        assert_eq!(r.min, Vec2::new(-5.0, -5.0));
        assert!(r.contains(Vec2::ZERO));
        assert!(r.contains(Vec2::new(5.0, -5.0)));
        assert!(!r.contains(Vec2::new(5.1, 0.0)));
    }

    #[test]
    fn test_position_helpers() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.range_to(&b) - 5.0).abs() < 1e-6);
        assert_eq!(a.displacement_to(&b), Vec2::new(3.0, 4.0));
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        t.advance();
        t.advance();
        assert_eq!(t.tick, 2);
    }

    #[test]
    fn test_default_snapshot_serializes() {
        let snap = GameStateSnapshot::default();
        let json = serde_json::to_string(&snap).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.time.tick, 0);
        assert!(back.visible_cells.is_empty());
        assert_eq!(back.phase, GamePhase::Active);
    }
}

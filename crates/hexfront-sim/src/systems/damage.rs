//! Layered damage model: defenses absorb first, health takes the overflow.

use hexfront_core::components::{Defenses, Health};

/// Apply `amount` of damage.
///
/// With defenses up, the hit lands on defenses and any negative remainder
/// spills into health. Without a defense pool (or with it depleted) the hit
/// lands on health directly. Health never leaves `[0, max]`.
pub fn take_damage(health: &mut Health, defenses: Option<&mut Defenses>, amount: i32) {
    match defenses {
        Some(def) if def.current > 0 => {
            def.current -= amount;
            if def.current < 0 {
                health.current += def.current;
                def.current = 0;
            }
        }
        _ => health.current -= amount,
    }
    health.current = health.current.clamp(0, health.max);
}

/// Restore `amount` of health, overflowing into defenses.
pub fn repair(health: &mut Health, defenses: &mut Defenses, amount: i32) {
    if health.current < health.max {
        health.current += amount;
        if health.current > health.max {
            let overflow = health.current - health.max;
            health.current = health.max;
            defenses.current = (defenses.current + overflow).min(defenses.max);
        }
    } else {
        defenses.current = (defenses.current + amount).min(defenses.max);
    }
}

pub fn is_destroyed(health: &Health) -> bool {
    health.current <= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hp(current: i32) -> Health {
        Health { current, max: 100 }
    }

    fn def(current: i32) -> Defenses {
        Defenses { current, max: 100 }
    }

    #[test]
    fn test_defenses_absorb_and_spill() {
        let mut h = hp(100);
        let mut d = def(30);
        take_damage(&mut h, Some(&mut d), 50);
        assert_eq!(d.current, 0);
        assert_eq!(h.current, 80);
    }

    #[test]
    fn test_defenses_fully_absorb() {
        let mut h = hp(100);
        let mut d = def(30);
        take_damage(&mut h, Some(&mut d), 20);
        assert_eq!(d.current, 10);
        assert_eq!(h.current, 100);
    }

    #[test]
    fn test_depleted_defenses_pass_damage_through() {
        let mut h = hp(60);
        let mut d = def(0);
        take_damage(&mut h, Some(&mut d), 20);
        assert_eq!((h.current, d.current), (40, 0));
    }

    #[test]
    fn test_health_clamped_at_zero() {
        let mut h = hp(10);
        take_damage(&mut h, None, 50);
        assert_eq!(h.current, 0);
        assert!(is_destroyed(&h));
    }

    #[test]
    fn test_repair_overflows_into_defenses() {
        let mut h = hp(100);
        let mut d = def(50);
        repair(&mut h, &mut d, 30);
        assert_eq!((h.current, d.current), (100, 80));

        let mut h = hp(90);
        let mut d = def(95);
        repair(&mut h, &mut d, 30);
        assert_eq!((h.current, d.current), (100, 100));
    }
}

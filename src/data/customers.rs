//! The regulars — walk-in customers and the scripted opening days.

use crate::shared::*;

fn profile(
    id: &str,
    name: &str,
    portrait_index: u32,
    tolerance: Tolerance,
    ice_preference: IcePreference,
) -> CustomerProfile {
    CustomerProfile {
        id: id.to_string(),
        name: name.to_string(),
        portrait_index,
        tolerance,
        ice_preference,
    }
}

fn slot(
    keywords: &[&str],
    abv_range: (f32, f32),
    time_limit_secs: f32,
    request_line: &str,
) -> OrderSpec {
    OrderSpec {
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        abv_min: abv_range.0,
        abv_max: abv_range.1,
        time_limit_secs,
        expected_technique: None,
        expected_glass: None,
        expected_garnish: None,
        request_line: Some(request_line.to_string()),
    }
}

fn mara() -> CustomerOrdersDef {
    let mut first = slot(
        &["courage"],
        (20.0, 40.0),
        60.0,
        "Something with teeth. I'm back on the cranes at dawn.",
    );
    first.expected_glass = Some("rocks".to_string());
    CustomerOrdersDef {
        profile: profile("mara_dockhand", "Mara", 0, Tolerance::Strong, IcePreference::Like),
        slots: vec![
            first,
            slot(
                &["thrill"],
                (15.0, 35.0),
                60.0,
                "One more. Make this one bite back.",
            ),
        ],
    }
}

fn fenwick() -> CustomerOrdersDef {
    let mut only = slot(
        &["melancholy", "comfort"],
        (5.0, 18.0),
        90.0,
        "Quiet one tonight. Something that remembers the rain.",
    );
    only.expected_technique = Some("stir".to_string());
    CustomerOrdersDef {
        profile: profile("old_fenwick", "Fenwick", 1, Tolerance::Weak, IcePreference::Dislike),
        slots: vec![only],
    }
}

fn sable() -> CustomerOrdersDef {
    CustomerOrdersDef {
        profile: profile("sable_courier", "Sable", 2, Tolerance::Normal, IcePreference::Neutral),
        slots: vec![
            slot(
                &["wonder"],
                (8.0, 22.0),
                45.0,
                "Surprise me. I've read every road sign twice.",
            ),
            slot(
                &["nostalgia"],
                (10.0, 25.0),
                60.0,
                "Now something like the cellar my gran kept.",
            ),
        ],
    }
}

fn ansel() -> CustomerOrdersDef {
    let mut only = slot(
        &["oblivion"],
        (0.0, 12.0),
        90.0,
        "Nothing loud. I just want the day to stop ringing.",
    );
    only.expected_garnish = Some("mint_sprig".to_string());
    CustomerOrdersDef {
        profile: profile("brother_ansel", "Ansel", 3, Tolerance::Weak, IcePreference::Neutral),
        slots: vec![only],
    }
}

fn captain_iro() -> CustomerOrdersDef {
    CustomerOrdersDef {
        profile: profile("captain_iro", "Captain Iro", 4, Tolerance::Strong, IcePreference::Like),
        slots: vec![
            slot(
                &["spite"],
                (25.0, 45.0),
                60.0,
                "To the harbormaster. May it burn all the way down.",
            ),
            slot(
                &["dread", "courage"],
                (20.0, 40.0),
                60.0,
                "We sail the strait tomorrow. Mix me something honest about it.",
            ),
            slot(
                &["comfort"],
                (5.0, 20.0),
                90.0,
                "Last one. Soft enough to sleep on.",
            ),
        ],
    }
}

pub fn populate_customers(pool: &mut CustomerPool) {
    pool.walk_ins = vec![mara(), fenwick(), sable(), ansel(), captain_iro()];

    // Scripted opening days; later days draw walk-ins at random.
    pool.day_plans = vec![
        DayPlan {
            day: 1,
            customers: vec![mara(), fenwick()],
        },
        DayPlan {
            day: 2,
            customers: vec![sable(), ansel(), captain_iro()],
        },
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_is_populated() {
        let mut pool = CustomerPool::default();
        populate_customers(&mut pool);

        assert_eq!(pool.walk_ins.len(), 5);
        assert_eq!(pool.day_plans.len(), 2);
        assert!(pool.plan_for_day(1).is_some());
        assert!(pool.plan_for_day(2).is_some());
        assert!(pool.plan_for_day(3).is_none());
    }

    #[test]
    fn test_every_customer_orders_within_limits() {
        let mut pool = CustomerPool::default();
        populate_customers(&mut pool);

        for def in pool
            .walk_ins
            .iter()
            .chain(pool.day_plans.iter().flat_map(|p| p.customers.iter()))
        {
            assert!(!def.slots.is_empty(), "{} has no orders", def.profile.id);
            assert!(
                def.slots.len() <= MAX_ORDER_SLOTS,
                "{} orders too many drinks",
                def.profile.id
            );
            for spec in &def.slots {
                assert!(spec.abv_min <= spec.abv_max);
                assert!(spec.time_limit_secs > 0.0);
            }
        }
    }
}

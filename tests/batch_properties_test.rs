use rand::rngs::StdRng;
use rand::SeedableRng;

use gym_meal_machine::generator::{random_fill_records, random_purchase_records, BatchShape};
use gym_meal_machine::machine::constants::{SLOT_CAPACITY, SLOT_COUNT};
use gym_meal_machine::machine::{Event, FillStatus, Journal, PurchaseOutcome};
use gym_meal_machine::Machine;

fn shapes() -> Vec<BatchShape> {
    vec![
        BatchShape::default(),
        BatchShape {
            catalogue_size: 5,
            fills: 400,
            purchases: 100,
            rejected_money_rate: 0.3,
        },
        BatchShape {
            catalogue_size: 40,
            fills: 60,
            purchases: 80,
            rejected_money_rate: 0.0,
        },
    ]
}

#[test]
fn test_placed_units_match_fill_records_minus_refusals() {
    for seed in 0..20 {
        for shape in shapes() {
            let mut rng = StdRng::seed_from_u64(seed);
            let fills = random_fill_records(&mut rng, &shape);

            let mut machine = Machine::new();
            let mut journal = Journal::new();
            let status = machine.fill(&fills, &mut journal);

            let refused = journal
                .events()
                .filter(|e| matches!(e, Event::NoPlacement { .. }))
                .count();

            if status == FillStatus::Completed {
                assert_eq!(
                    machine.grid().total_units() as usize,
                    fills.len() - refused,
                    "seed {seed}"
                );
            }
            assert!(machine.grid().iter().all(|(_, s)| s.capacity <= SLOT_CAPACITY));

            // Every processed record counts towards exactly one product.
            let amounts: u32 = machine.registry().iter().map(|p| p.amount).sum();
            assert!(amounts as usize <= fills.len());
        }
    }
}

#[test]
fn test_five_products_overflow_into_following_slots() {
    let shape = BatchShape {
        catalogue_size: 5,
        fills: 400,
        purchases: 0,
        rejected_money_rate: 0.0,
    };
    let mut rng = StdRng::seed_from_u64(3);
    let fills = random_fill_records(&mut rng, &shape);

    let mut machine = Machine::new();
    let mut journal = Journal::new();
    let status = machine.fill(&fills, &mut journal);

    // 400 units of 5 products cannot fit in fewer than 24 slots of 10.
    assert!(machine.grid().iter().all(|(_, s)| s.product.is_some()));
    assert!(machine.registry().len() <= 5);

    // First-fit leaves each product at most one partially filled slot.
    for (index, product) in machine.registry().iter().enumerate() {
        let partial = machine
            .grid()
            .iter()
            .filter(|(_, s)| s.product.map(|id| id.0) == Some(index) && !s.is_full())
            .count();
        assert!(partial <= 1, "{} has {} partial slots", product.name, partial);
    }

    let refused = journal
        .events()
        .filter(|e| matches!(e, Event::NoPlacement { .. }))
        .count();
    assert!(refused > 0);
    if status == FillStatus::Completed {
        assert_eq!(machine.grid().total_units() as usize + refused, fills.len());
    } else {
        assert_eq!(machine.grid().full_slot_count(), SLOT_COUNT);
    }
}

#[test]
fn test_change_never_exceeds_tendered() {
    for seed in 0..20 {
        let shape = BatchShape::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let fills = random_fill_records(&mut rng, &shape);
        let purchases = random_purchase_records(&mut rng, &shape);

        let mut machine = Machine::new();
        let mut journal = Journal::new();
        machine.fill(&fills, &mut journal);

        for record in &purchases {
            let before = machine.grid().total_units();
            let receipt = machine.purchase_one(record, &mut journal);
            let after = machine.grid().total_units();

            match receipt.outcome {
                PurchaseOutcome::Dispensed { slot, change } => {
                    let held = machine.grid().get(slot).and_then(|s| machine.product_in(s));
                    let price = held.map(|p| p.price).unwrap_or_default();
                    assert_eq!(change + price, receipt.tender.accepted_total);
                    assert_eq!(after + 1, before);
                }
                _ => assert_eq!(after, before),
            }
        }
    }
}

#[test]
fn test_rejected_money_logged_once_per_record() {
    let shape = BatchShape {
        rejected_money_rate: 1.0,
        ..BatchShape::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let fills = random_fill_records(&mut rng, &shape);
    let purchases = random_purchase_records(&mut rng, &shape);

    let mut machine = Machine::new();
    machine.fill(&fills, &mut Journal::new());

    for record in &purchases {
        let mut journal = Journal::new();
        let receipt = machine.purchase_one(record, &mut journal);
        let rejected = journal
            .events()
            .filter(|e| matches!(e, Event::RejectedDenomination { .. }))
            .count();
        assert_eq!(rejected, receipt.tender.rejected.len());
        assert_eq!(rejected, 1);
    }
}

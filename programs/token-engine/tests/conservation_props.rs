use anchor_lang::prelude::Pubkey;
use proptest::prelude::*;

use token_engine::engine::{GrantParams, TokenEngine};
use token_engine::state::PurchaseConfig;

const OWNER: u8 = 1;
const START: i64 = 1_700_000_000;

fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

#[derive(Clone, Debug)]
enum Op {
    Mint(u64),
    Issue(u8, u64),
    Transfer(u8, u8, u64),
    Approve(u8, u8, u64),
    TransferFrom(u8, u8, u8, u64),
    Buy(u8, u64),
    FreezeAccount(u8, bool),
    FreezeToken(bool),
    Grant(u8, u64, u64, u64),
    Release(u8),
    Revoke(u8),
    Advance(i64),
}

fn user() -> impl Strategy<Value = u8> {
    10u8..16
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (1u64..500).prop_map(Op::Mint),
        (user(), 0u64..200).prop_map(|(to, n)| Op::Issue(to, n)),
        (user(), user(), 0u64..200).prop_map(|(a, b, n)| Op::Transfer(a, b, n)),
        (user(), user(), 0u64..200).prop_map(|(a, b, n)| Op::Approve(a, b, n)),
        (user(), user(), user(), 0u64..200)
            .prop_map(|(s, o, t, n)| Op::TransferFrom(s, o, t, n)),
        (user(), 0u64..400).prop_map(|(b, p)| Op::Buy(b, p)),
        (user(), proptest::bool::ANY).prop_map(|(a, f)| Op::FreezeAccount(a, f)),
        proptest::bool::ANY.prop_map(Op::FreezeToken),
        (user(), 1u64..300, 0u64..1_000, 1u64..2_000)
            .prop_map(|(b, n, cliff, dur)| Op::Grant(b, n, cliff, dur)),
        user().prop_map(Op::Release),
        user().prop_map(Op::Revoke),
        (0i64..800).prop_map(Op::Advance),
    ]
}

fn setup() -> TokenEngine {
    let owner = key(OWNER);
    let mut engine = TokenEngine::default();
    engine.initialize(owner, key(2), key(3)).unwrap();
    engine
        .configure_purchase(
            &owner,
            PurchaseConfig {
                buy_price_per_unit: 2,
                circulation_cap: 5_000,
                default_balance_limit: 400,
                contribution_minimum: 5,
            },
        )
        .unwrap();
    for n in 10..13 {
        engine.set_buyer_whitelisted(&owner, key(n), true).unwrap();
    }
    engine.set_custom_buyer_cap(&owner, key(13), 50).unwrap();
    engine
}

/// Applies `op`, discarding rejections; a rejected call must not change state.
fn apply(engine: &mut TokenEngine, op: &Op, now: &mut i64) -> Result<(), TestCaseError> {
    let owner = key(OWNER);
    let before = engine.clone();
    let failed = match *op {
        Op::Mint(n) => engine.mint(&owner, n).is_err(),
        Op::Issue(to, n) => engine.issue_tokens(&owner, key(to), n).is_err(),
        Op::Transfer(a, b, n) => engine.transfer(&key(a), key(b), n).is_err(),
        Op::Approve(a, b, n) => engine.approve(&key(a), key(b), n).is_err(),
        Op::TransferFrom(s, o, t, n) => engine.transfer_from(&key(s), key(o), key(t), n).is_err(),
        Op::Buy(b, p) => engine.buy(&key(b), p).is_err(),
        Op::FreezeAccount(a, f) => engine.freeze_account(&owner, key(a), f).is_err(),
        Op::FreezeToken(f) => engine.freeze_token(&owner, f).is_err(),
        Op::Grant(b, n, cliff, dur) => engine
            .grant_vested_tokens(
                &owner,
                GrantParams {
                    beneficiary: key(b),
                    fully_vested_amount: n,
                    start_time: 0,
                    cliff_duration: cliff,
                    vesting_duration: dur,
                    revocable: true,
                },
                *now,
            )
            .is_err(),
        Op::Release(b) => engine
            .release_vested_tokens_for_beneficiary(key(b), *now)
            .is_err(),
        Op::Revoke(b) => engine.revoke_vesting(&owner, key(b), *now).is_err(),
        Op::Advance(dt) => {
            *now += dt;
            false
        }
    };
    if failed {
        prop_assert_eq!(&*engine, &before);
    }
    Ok(())
}

proptest! {
    #[test]
    fn supply_is_conserved_under_random_sequences(
        ops in prop::collection::vec(op(), 1..96),
    ) {
        let mut engine = setup();
        let mut now = START;

        for op in &ops {
            apply(&mut engine, op, &mut now)?;

            let sum: u128 = (0..engine.account_count())
                .filter_map(|i| engine.account_at(i))
                .map(|entry| u128::from(entry.amount))
                .sum();
            prop_assert_eq!(sum, u128::from(engine.total_minted()));
            prop_assert!(engine.total_in_circulation() <= engine.total_minted());
            prop_assert_eq!(
                engine.reserve_balance(),
                engine.total_minted() - engine.total_in_circulation()
            );
            prop_assert!(engine.total_in_circulation() <= engine.purchase_config().circulation_cap);
            prop_assert_eq!(
                engine.vesting.aggregate_unreleased().unwrap(),
                engine.ledger.escrow_balance()
            );
        }
    }

    #[test]
    fn released_never_exceeds_vested(
        amount in 1u64..5_000,
        cliff in 0u64..1_000,
        extra in 1u64..5_000,
        checkpoints in prop::collection::vec(0i64..8_000, 1..16),
    ) {
        let owner = key(OWNER);
        let beneficiary = key(20);
        let mut engine = setup();
        engine.mint(&owner, 10_000).unwrap();
        engine
            .grant_vested_tokens(
                &owner,
                GrantParams {
                    beneficiary,
                    fully_vested_amount: amount,
                    start_time: START,
                    cliff_duration: cliff,
                    vesting_duration: cliff + extra,
                    revocable: false,
                },
                START,
            )
            .unwrap();

        let mut released = 0u64;
        let mut at = START;
        for step in checkpoints {
            at += step;
            released += engine
                .release_vested_tokens(&beneficiary, at)
                .unwrap()
                .value;
            let vested = engine.vested_amount(&beneficiary, at).unwrap();
            prop_assert!(vested <= amount);
            prop_assert_eq!(
                released,
                engine.vesting_schedule(&beneficiary).unwrap().released_amount
            );
            prop_assert_eq!(released, vested);
            prop_assert_eq!(engine.balance_of(&beneficiary), released);
        }
    }
}

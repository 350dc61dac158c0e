use std::collections::BTreeMap;

use log::info;
use mined_api::prelude::*;

/// A place that can hold tokens: one of the named pools or an account's circulating balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    Pool(PoolKind),
    Account(Address),
}

/// Pool balances, circulating balances and the supply counters. Every write goes through a
/// [`LedgerTx`], which stages changes and checks conservation before anything becomes visible.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ledger {
    pools: Pools,
    balances: BTreeMap<Address, Amount>,

    initial_supply: Amount,
    total_supply: Amount,
    total_burned: Amount,
    cumulative_emission: Amount,
    cumulative_burn: Amount,
    last_emission_block: u64,

    total_staked: Amount,
    total_research_value: u128,
}

impl Ledger {
    /// Splits the initial supply across the pools by basis points and credits the remainder to
    /// the admin account. `genesis_staked` is recorded against the staking pool.
    pub fn genesis(config: &TokenomicsConfig, genesis_staked: Amount) -> Result<Self, MinedError> {
        let mut pools = Pools::default();
        let mut allocated: Amount = 0;

        for (kind, bps) in PoolKind::ALL.iter().zip(config.pool_allocations_bps()) {
            let share = config
                .initial_supply
                .checked_mul(bps as u128)
                .ok_or(MinedError::ArithmeticOverflow)?
                / BPS_DENOMINATOR;
            *pools.get_mut(*kind) = share;
            allocated = allocated
                .checked_add(share)
                .ok_or(MinedError::ArithmeticOverflow)?;
        }

        let remainder = config
            .initial_supply
            .checked_sub(allocated)
            .ok_or(MinedError::InvalidConfig)?;

        let mut balances = BTreeMap::new();
        if remainder > 0 {
            balances.insert(config.admin, remainder);
        }

        check_condition(pools.staking >= genesis_staked, MinedError::InvalidConfig)?;

        let ledger = Self {
            pools,
            balances,
            initial_supply: config.initial_supply,
            total_supply: config.initial_supply,
            total_burned: 0,
            cumulative_emission: 0,
            cumulative_burn: 0,
            last_emission_block: 0,
            total_staked: genesis_staked,
            total_research_value: 0,
        };

        ledger.check_invariants()?;
        Ok(ledger)
    }

    /// Rebuilds a ledger from persisted state; the caller is expected to run the invariant check.
    pub fn restore(state: &GlobalState, balances: BTreeMap<Address, Amount>) -> Self {
        Self {
            pools: state.pools,
            balances,
            initial_supply: state.initial_supply,
            total_supply: state.total_supply,
            total_burned: state.total_burned,
            cumulative_emission: state.cumulative_emission,
            cumulative_burn: state.cumulative_burn,
            last_emission_block: state.last_emission_block,
            total_staked: state.total_staked,
            total_research_value: state.total_research_value,
        }
    }

    pub fn pools(&self) -> &Pools {
        &self.pools
    }

    pub fn pool(&self, kind: PoolKind) -> Amount {
        self.pools.get(kind)
    }

    pub fn balance_of(&self, address: &Address) -> Amount {
        self.balances.get(address).copied().unwrap_or(0)
    }

    pub fn balances(&self) -> &BTreeMap<Address, Amount> {
        &self.balances
    }

    pub fn bucket(&self, bucket: Bucket) -> Amount {
        match bucket {
            Bucket::Pool(kind) => self.pool(kind),
            Bucket::Account(address) => self.balance_of(&address),
        }
    }

    pub fn initial_supply(&self) -> Amount {
        self.initial_supply
    }

    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn total_burned(&self) -> Amount {
        self.total_burned
    }

    pub fn cumulative_emission(&self) -> Amount {
        self.cumulative_emission
    }

    pub fn cumulative_burn(&self) -> Amount {
        self.cumulative_burn
    }

    pub fn last_emission_block(&self) -> u64 {
        self.last_emission_block
    }

    pub fn total_staked(&self) -> Amount {
        self.total_staked
    }

    pub fn total_research_value(&self) -> u128 {
        self.total_research_value
    }

    pub fn circulating_supply(&self) -> Option<Amount> {
        self.balances
            .values()
            .try_fold(0u128, |acc, v| acc.checked_add(*v))
    }

    /// Starts a staged transaction against the current balances.
    pub fn begin(&self) -> LedgerTx<'_> {
        LedgerTx {
            ledger: self,
            staged: BTreeMap::new(),
            minted: 0,
            burned: 0,
            emission_block: None,
            total_staked: self.total_staked,
            total_research_value: self.total_research_value,
        }
    }

    /// Applies a committed changeset. Infallible: every check already ran in `commit`.
    pub fn apply(&mut self, changes: Changeset) {
        for (bucket, value) in changes.buckets {
            match bucket {
                Bucket::Pool(kind) => *self.pools.get_mut(kind) = value,
                Bucket::Account(address) => {
                    if value == 0 {
                        self.balances.remove(&address);
                    } else {
                        self.balances.insert(address, value);
                    }
                }
            }
        }

        self.total_supply         = changes.total_supply;
        self.total_burned         = changes.total_burned;
        self.cumulative_emission  = changes.cumulative_emission;
        self.cumulative_burn      = changes.cumulative_burn;
        self.last_emission_block  = changes.last_emission_block;
        self.total_staked         = changes.total_staked;
        self.total_research_value = changes.total_research_value;
    }

    /// Full check of the supply invariants. Linear in the number of accounts.
    pub fn check_invariants(&self) -> Result<(), MinedError> {
        let pools = self.pools.total().ok_or(MinedError::InvariantViolation)?;
        let circulating = self.circulating_supply().ok_or(MinedError::InvariantViolation)?;

        // sum(pools) + circulating == total supply
        check_condition(
            pools.checked_add(circulating) == Some(self.total_supply),
            MinedError::InvariantViolation,
        )?;

        // total supply == initial + emitted - burned
        let expected = self
            .initial_supply
            .checked_add(self.cumulative_emission)
            .and_then(|v| v.checked_sub(self.cumulative_burn));
        check_condition(expected == Some(self.total_supply), MinedError::InvariantViolation)?;

        check_condition(
            self.total_burned == self.cumulative_burn,
            MinedError::InvariantViolation,
        )?;

        // Every staked token sits in the staking pool.
        check_condition(
            self.pools.staking >= self.total_staked,
            MinedError::InvariantViolation,
        )
    }
}

/// The outcome of paying a reward: what came from the pool, what was minted, what burned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disbursement {
    pub drawn: Amount,
    pub shortfall: Amount,
    pub refill: Amount,
    pub minted: Amount,
    pub burned: Amount,
    pub net: Amount,
}

/// Staged writes against a [`Ledger`].
pub struct LedgerTx<'a> {
    ledger: &'a Ledger,
    staged: BTreeMap<Bucket, Amount>,
    minted: Amount,
    burned: Amount,
    emission_block: Option<u64>,
    total_staked: Amount,
    total_research_value: u128,
}

impl<'a> LedgerTx<'a> {
    pub fn balance(&self, bucket: Bucket) -> Amount {
        self.staged
            .get(&bucket)
            .copied()
            .unwrap_or_else(|| self.ledger.bucket(bucket))
    }

    pub fn last_emission_block(&self) -> u64 {
        self.emission_block.unwrap_or(self.ledger.last_emission_block)
    }

    pub fn total_research_value(&self) -> u128 {
        self.total_research_value
    }

    pub fn debit(&mut self, bucket: Bucket, amount: Amount) -> Result<(), MinedError> {
        let balance = self
            .balance(bucket)
            .checked_sub(amount)
            .ok_or(MinedError::InsufficientBalance)?;
        self.staged.insert(bucket, balance);
        Ok(())
    }

    pub fn credit(&mut self, bucket: Bucket, amount: Amount) -> Result<(), MinedError> {
        let balance = self
            .balance(bucket)
            .checked_add(amount)
            .ok_or(MinedError::ArithmeticOverflow)?;
        self.staged.insert(bucket, balance);
        Ok(())
    }

    pub fn transfer(&mut self, from: Bucket, to: Bucket, amount: Amount) -> Result<(), MinedError> {
        self.debit(from, amount)?;
        self.credit(to, amount)
    }

    /// Creates new supply inside `to` and anchors the emission clock at `height`.
    pub fn mint(&mut self, to: Bucket, amount: Amount, height: u64) -> Result<(), MinedError> {
        self.credit(to, amount)?;
        self.minted = self
            .minted
            .checked_add(amount)
            .ok_or(MinedError::ArithmeticOverflow)?;
        self.emission_block = Some(height);
        Ok(())
    }

    /// Destroys an amount that has already been debited from a bucket and not credited back.
    pub fn destroy(&mut self, amount: Amount) -> Result<(), MinedError> {
        self.burned = self
            .burned
            .checked_add(amount)
            .ok_or(MinedError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Step one of a disbursement: take as much of `amount` as `pool` holds.
    pub fn try_pool(&mut self, pool: PoolKind, amount: Amount) -> Result<Amount, MinedError> {
        let drawn = amount.min(self.balance(Bucket::Pool(pool)));
        self.debit(Bucket::Pool(pool), drawn)?;
        Ok(drawn)
    }

    /// Step two of a disbursement: mint `shortfall + refill` into `pool`, then take the shortfall
    /// back out. The pool is left holding the refill.
    pub fn mint_shortfall(
        &mut self,
        pool: PoolKind,
        shortfall: Amount,
        refill: Amount,
        height: u64,
    ) -> Result<Amount, MinedError> {
        if shortfall == 0 {
            return Ok(0);
        }

        let minted = shortfall
            .checked_add(refill)
            .ok_or(MinedError::ArithmeticOverflow)?;
        self.mint(Bucket::Pool(pool), minted, height)?;
        self.debit(Bucket::Pool(pool), shortfall)?;
        Ok(minted)
    }

    /// Pays `gross` to `recipient` out of `pool`, burning `burn` on the way. Pool exhaustion
    /// never fails the payment: any shortfall is minted, together with a refill computed by
    /// `refill(elapsed_blocks, total_research_value)`.
    pub fn disburse<F>(
        &mut self,
        pool: PoolKind,
        recipient: Address,
        gross: Amount,
        burn: Amount,
        height: u64,
        refill: F,
    ) -> Result<Disbursement, MinedError>
    where
        F: FnOnce(u64, u128) -> Result<Amount, MinedError>,
    {
        let net = gross
            .checked_sub(burn)
            .ok_or(MinedError::InvariantViolation)?;

        let drawn = self.try_pool(pool, gross)?;
        let shortfall = gross - drawn;

        let (refill, minted) = if shortfall > 0 {
            let elapsed = height.saturating_sub(self.last_emission_block());
            let refill = refill(elapsed, self.total_research_value)?;
            let minted = self.mint_shortfall(pool, shortfall, refill, height)?;
            (refill, minted)
        } else {
            (0, 0)
        };

        self.destroy(burn)?;
        self.credit(Bucket::Account(recipient), net)?;

        Ok(Disbursement {
            drawn,
            shortfall,
            refill,
            minted,
            burned: burn,
            net,
        })
    }

    pub fn add_staked(&mut self, amount: Amount) -> Result<(), MinedError> {
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(MinedError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn sub_staked(&mut self, amount: Amount) -> Result<(), MinedError> {
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(MinedError::InsufficientStake)?;
        Ok(())
    }

    pub fn add_research_value(&mut self, value: u128) -> Result<(), MinedError> {
        self.total_research_value = self
            .total_research_value
            .checked_add(value)
            .ok_or(MinedError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Verifies conservation (net bucket delta == minted - burned) and produces the changeset.
    pub fn commit(self) -> Result<Changeset, MinedError> {
        let ledger = self.ledger;

        let mut delta: i128 = 0;
        for (bucket, value) in self.staged.iter() {
            let before = ledger.bucket(*bucket);
            let step = i128::try_from(*value)
                .ok()
                .zip(i128::try_from(before).ok())
                .map(|(after, before)| after - before)
                .ok_or(MinedError::ArithmeticOverflow)?;
            delta = delta.checked_add(step).ok_or(MinedError::ArithmeticOverflow)?;
        }

        let expected = i128::try_from(self.minted)
            .ok()
            .zip(i128::try_from(self.burned).ok())
            .map(|(minted, burned)| minted - burned)
            .ok_or(MinedError::ArithmeticOverflow)?;
        check_condition(delta == expected, MinedError::InvariantViolation)?;

        let total_supply = ledger
            .total_supply
            .checked_add(self.minted)
            .and_then(|v| v.checked_sub(self.burned))
            .ok_or(MinedError::InvariantViolation)?;
        let cumulative_emission = ledger
            .cumulative_emission
            .checked_add(self.minted)
            .ok_or(MinedError::ArithmeticOverflow)?;
        let cumulative_burn = ledger
            .cumulative_burn
            .checked_add(self.burned)
            .ok_or(MinedError::ArithmeticOverflow)?;
        let total_burned = ledger
            .total_burned
            .checked_add(self.burned)
            .ok_or(MinedError::ArithmeticOverflow)?;

        let staking_pool = self.balance(Bucket::Pool(PoolKind::Staking));
        check_condition(
            staking_pool >= self.total_staked,
            MinedError::InvariantViolation,
        )?;

        if self.minted > 0 {
            info!("minting {} (cumulative {})", amount_to_ui(self.minted), amount_to_ui(cumulative_emission));
        }
        if self.burned > 0 {
            info!("burning {} (cumulative {})", amount_to_ui(self.burned), amount_to_ui(cumulative_burn));
        }

        Ok(Changeset {
            buckets: self.staged.into_iter().collect(),
            minted: self.minted,
            burned: self.burned,
            total_supply,
            total_burned,
            cumulative_emission,
            cumulative_burn,
            last_emission_block: self.emission_block.unwrap_or(ledger.last_emission_block),
            total_staked: self.total_staked,
            total_research_value: self.total_research_value,
        })
    }
}

/// Verified post-state of a [`LedgerTx`], ready to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Changeset {
    buckets: Vec<(Bucket, Amount)>,
    pub minted: Amount,
    pub burned: Amount,
    pub total_supply: Amount,
    pub total_burned: Amount,
    pub cumulative_emission: Amount,
    pub cumulative_burn: Amount,
    pub last_emission_block: u64,
    pub total_staked: Amount,
    pub total_research_value: u128,
}

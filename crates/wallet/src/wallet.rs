use core::cell::Cell;

use idlekit_core::{Currency, CurrencyTable, CurrencyType, DomainError, DomainResult, Feature};
use idlekit_events::{EventDispatcher, SimpleEvent};

use crate::save::WalletSaveData;

/// Key the wallet's save data is stored under.
pub const WALLET_SAVE_KEY: &str = "wallet";

/// Feature: Wallet (currency balances + gain multipliers).
///
/// Every [`CurrencyType`] has exactly one balance (starting at 0) and one
/// multiplier (starting at 1) for the lifetime of the wallet.
///
/// All operations take `&self`. Observers of [`Wallet::on_currency_gain`] may
/// hold a `Weak<Wallet>` and query it while a gain is being dispatched; they
/// see the balance from before that gain is credited.
///
/// Not thread-safe; the wallet is `!Sync`.
pub struct Wallet {
    balances: CurrencyTable<Cell<f64>>,
    multipliers: CurrencyTable<Cell<f64>>,
    on_currency_gain: EventDispatcher<Currency>,
}

impl Wallet {
    pub fn new() -> Self {
        Self {
            balances: CurrencyTable::from_fn(|_| Cell::new(0.0)),
            multipliers: CurrencyTable::from_fn(|_| Cell::new(1.0)),
            on_currency_gain: EventDispatcher::new(),
        }
    }

    /// Gain `currency` after applying the multiplier for its type.
    ///
    /// Observers are notified with the multiplied value, then the balance is
    /// credited. Returns the credited value. If the multiplied value is not
    /// valid, nothing changes and no observer runs.
    pub fn gain_currency(&self, currency: Currency) -> DomainResult<Currency> {
        let currency_type = currency.currency_type();
        let gained = currency.multiplied(self.get_currency_multiplier(currency_type));

        if !gained.is_valid() {
            tracing::warn!(currency = %gained, "could not gain currency");
            return Err(DomainError::invalid_currency(gained));
        }

        self.on_currency_gain.dispatch(&gained);

        let balance = &self.balances[currency_type];
        balance.set(balance.get() + gained.amount());
        tracing::debug!(
            currency_type = %currency_type,
            amount = gained.amount(),
            balance = balance.get(),
            "currency gained"
        );

        Ok(gained)
    }

    /// Whether the balance covers `currency`.
    pub fn has_currency(&self, currency: &Currency) -> bool {
        self.balance(currency.currency_type()) >= currency.amount()
    }

    /// Subtract `currency` from its balance.
    ///
    /// Affordability is **not** checked: the balance may go negative. Use
    /// [`Wallet::pay_if_possible`] for a guarded spend.
    pub fn lose_currency(&self, currency: Currency) -> DomainResult<()> {
        if !currency.is_valid() {
            tracing::warn!(currency = %currency, "could not lose currency");
            return Err(DomainError::invalid_currency(currency));
        }

        let currency_type = currency.currency_type();
        let balance = &self.balances[currency_type];
        balance.set(balance.get() - currency.amount());
        tracing::debug!(
            currency_type = %currency_type,
            amount = currency.amount(),
            balance = balance.get(),
            "currency lost"
        );

        Ok(())
    }

    /// Subtract `currency` and return `true` if the wallet can afford it.
    ///
    /// Otherwise nothing is subtracted and `false` is returned. An invalid
    /// currency is never subtracted.
    pub fn pay_if_possible(&self, currency: Currency) -> bool {
        self.has_currency(&currency) && self.lose_currency(currency).is_ok()
    }

    pub fn get_currency_multiplier(&self, currency_type: CurrencyType) -> f64 {
        self.multipliers[currency_type].get()
    }

    /// Overwrite the gain multiplier for `currency_type`.
    ///
    /// The value is not validated; zero or negative multipliers make every
    /// subsequent gain of that type scale to zero or be rejected.
    pub fn set_currency_multiplier(&self, multiplier: f64, currency_type: CurrencyType) {
        self.multipliers[currency_type].set(multiplier);
        tracing::debug!(currency_type = %currency_type, multiplier, "multiplier set");
    }

    pub fn balance(&self, currency_type: CurrencyType) -> f64 {
        self.balances[currency_type].get()
    }

    /// Every balance, in [`CurrencyType::ALL`] order.
    pub fn balances(&self) -> impl Iterator<Item = (CurrencyType, f64)> + '_ {
        self.balances.iter().map(|(t, b)| (t, b.get()))
    }

    /// Emitted with the multiplied value whenever a gain succeeds.
    pub fn on_currency_gain(&self) -> &dyn SimpleEvent<Currency> {
        self.on_currency_gain.as_event()
    }

    fn overwrite(&self, currency_type: CurrencyType, value: Option<f64>) {
        if let Some(value) = value {
            self.balances[currency_type].set(value);
        }
    }
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Wallet")
            .field("balances", &self.balances)
            .field("multipliers", &self.multipliers)
            .field("on_currency_gain", &self.on_currency_gain)
            .finish()
    }
}

impl Feature for Wallet {
    type SaveData = WalletSaveData;

    fn save_key(&self) -> &'static str {
        WALLET_SAVE_KEY
    }

    fn can_access(&self) -> bool {
        true
    }

    fn save(&self) -> WalletSaveData {
        WalletSaveData {
            money: Some(self.balance(CurrencyType::Money)),
            secondary: Some(self.balance(CurrencyType::Secondary)),
        }
    }

    /// Present fields overwrite their balance; absent fields are left alone.
    fn load(&self, data: &WalletSaveData) {
        self.overwrite(CurrencyType::Money, data.money);
        self.overwrite(CurrencyType::Secondary, data.secondary);
        tracing::debug!(money = ?data.money, secondary = ?data.secondary, "wallet loaded");
    }
}

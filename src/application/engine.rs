use crate::domain::calendar::{DateFormat, due_date};
use crate::domain::car::{Car, CarCategory};
use crate::domain::customer::Customer;
use crate::domain::money::{CurrencyFormat, round_money};
use crate::domain::ports::{ClockBox, CurrencyFormatterBox, RandomSourceBox, RepositoryBox};
use crate::domain::selection::random_position;
use crate::domain::tax::TaxSchedule;
use crate::domain::transaction::Transaction;
use crate::error::{RentalError, Result};
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::random::ThreadRandom;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Prices rentals and hands out cars.
///
/// `RentalEngine` owns its collaborators: the car inventory, the tax schedule,
/// a random source, a clock and a currency formatter. All of them are supplied
/// at construction; the engine never mutates them, so one instance can serve
/// concurrent requests.
pub struct RentalEngine {
    cars: RepositoryBox<Car>,
    tax_schedule: TaxSchedule,
    random: RandomSourceBox,
    clock: ClockBox,
    currency: CurrencyFormatterBox,
    date_format: DateFormat,
}

impl RentalEngine {
    /// Creates a new `RentalEngine` with the system clock, the thread-local
    /// random generator and the default currency and date formats.
    ///
    /// # Arguments
    ///
    /// * `cars` - The inventory used to resolve car identifiers.
    /// * `tax_schedule` - The age brackets applied to every price.
    pub fn new(cars: RepositoryBox<Car>, tax_schedule: TaxSchedule) -> Self {
        Self {
            cars,
            tax_schedule,
            random: Box::new(ThreadRandom),
            clock: Box::new(SystemClock),
            currency: Box::new(CurrencyFormat::default()),
            date_format: DateFormat::default(),
        }
    }

    pub fn with_random(mut self, random: RandomSourceBox) -> Self {
        self.random = random;
        self
    }

    pub fn with_clock(mut self, clock: ClockBox) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_currency_formatter(mut self, currency: CurrencyFormatterBox) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_date_format(mut self, date_format: DateFormat) -> Self {
        self.date_format = date_format;
        self
    }

    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax_schedule
    }

    /// Picks a uniformly distributed valid index into `items`.
    pub fn random_position<T>(&self, items: &[T]) -> Result<usize> {
        random_position(items, self.random.as_ref())
    }

    /// Picks one of the category's candidate car identifiers.
    ///
    /// An empty pool is rejected here, ahead of [`random_position`], only to
    /// name the category in the error.
    pub fn choose_car(&self, category: &CarCategory) -> Result<String> {
        if category.car_ids.is_empty() {
            return Err(RentalError::InvalidArgument(format!(
                "category {} has no candidate cars",
                category.id
            )));
        }
        let position = self.random_position(&category.car_ids)?;
        let car_id = category.car_ids[position].clone();
        debug!(category = %category.id, position, car_id = %car_id, "Chose car");
        Ok(car_id)
    }

    /// Resolves a random candidate of `category` through the inventory.
    ///
    /// Exactly one lookup is made, with the chosen identifier. Lookup failures
    /// are returned as they are.
    pub async fn get_available_car(&self, category: &CarCategory) -> Result<Car> {
        let car_id = self.choose_car(category)?;
        self.cars.find(&car_id).await
    }

    /// The unformatted price of renting from `category` for `days` days,
    /// rounded to cents.
    pub fn final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: i64,
    ) -> Result<Decimal> {
        let days = positive_days(days)?;
        let multiplier = self.tax_schedule.rate_for(customer.age)?;
        let price = category
            .price
            .checked_mul(Decimal::from(days))
            .and_then(|base_price| base_price.checked_mul(multiplier))
            .map(round_money)
            .ok_or_else(|| {
                RentalError::InvalidArgument(format!(
                    "price of {days} days in category {} is out of range",
                    category.id
                ))
            })?;
        debug!(
            customer = %customer.id,
            category = %category.id,
            days,
            %multiplier,
            %price,
            "Calculated price"
        );
        Ok(price)
    }

    /// [`RentalEngine::final_price`] rendered by the currency formatter.
    pub fn calculate_final_price(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: i64,
    ) -> Result<String> {
        let price = self.final_price(customer, category, days)?;
        Ok(self.currency.format(price))
    }

    /// Rents a car of `category` to `customer` for `days` days.
    ///
    /// The clock is read once, before the inventory lookup. Either a complete
    /// `Transaction` is returned or nothing is.
    pub async fn rent(
        &self,
        customer: &Customer,
        category: &CarCategory,
        days: i64,
    ) -> Result<Transaction> {
        let duration = positive_days(days)?;
        let today = self.clock.today();

        let car = self.get_available_car(category).await?;
        let due = self.date_format.render(due_date(today, duration)?)?;
        let amount = self.calculate_final_price(customer, category, days)?;

        info!(
            customer = %customer.id,
            car = %car.id,
            due_date = %due,
            amount = %amount,
            "Rental completed"
        );
        Ok(Transaction::new(customer.clone(), car, due, amount))
    }
}

fn positive_days(days: i64) -> Result<u64> {
    u64::try_from(days)
        .ok()
        .filter(|days| *days > 0)
        .ok_or_else(|| {
            RentalError::InvalidArgument(format!(
                "number of days must be positive, got {days}"
            ))
        })
}

#![allow(dead_code)]

use async_trait::async_trait;
use car_rental::domain::car::{Car, CarCategory};
use car_rental::domain::ports::Repository;
use car_rental::error::Result;
use car_rental::infrastructure::in_memory::InMemoryRepository;
use rust_decimal::Decimal;
use std::sync::{Arc, Mutex};

pub fn car(id: &str) -> Car {
    Car {
        id: id.to_string(),
        name: format!("Car {id}"),
        release_year: 2020,
        available: true,
        gas_available: true,
    }
}

pub fn category(price: Decimal, car_ids: &[&str]) -> CarCategory {
    CarCategory {
        id: "compact".to_string(),
        name: "Compact".to_string(),
        price,
        car_ids: car_ids.iter().map(|id| id.to_string()).collect(),
    }
}

/// In-memory car inventory that remembers every id it was asked for.
#[derive(Clone, Default)]
pub struct RecordingRepository {
    cars: InMemoryRepository<Car>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl RecordingRepository {
    pub fn with_cars(cars: impl IntoIterator<Item = Car>) -> Self {
        Self {
            cars: InMemoryRepository::with_records(cars),
            lookups: Arc::default(),
        }
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl Repository<Car> for RecordingRepository {
    async fn find(&self, id: &str) -> Result<Car> {
        self.lookups.lock().unwrap().push(id.to_string());
        self.cars.find(id).await
    }

    async fn find_all(&self) -> Result<Vec<Car>> {
        self.cars.find_all().await
    }
}

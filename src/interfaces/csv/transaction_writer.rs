use crate::domain::transaction::Transaction;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct TransactionRow<'a> {
    customer_id: &'a str,
    customer_name: &'a str,
    car_id: &'a str,
    car_name: &'a str,
    due_date: &'a str,
    amount: &'a str,
}

impl<'a> From<&'a Transaction> for TransactionRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        Self {
            customer_id: &tx.customer.id,
            customer_name: &tx.customer.name,
            car_id: &tx.car.id,
            car_name: &tx.car.name,
            due_date: &tx.due_date,
            amount: &tx.amount,
        }
    }
}

/// Writes completed rentals as CSV rows, one per transaction.
pub struct TransactionWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> TransactionWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, tx: &Transaction) -> Result<()> {
        self.writer.serialize(TransactionRow::from(tx))?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::car::Car;
    use crate::domain::customer::Customer;

    fn transaction(amount: &str) -> Transaction {
        Transaction::new(
            Customer::new("c-1", "Ana", 20),
            Car {
                id: "car-1".to_string(),
                name: "Golf".to_string(),
                release_year: 2020,
                available: true,
                gas_available: true,
            },
            "November 10, 2020".to_string(),
            amount.to_string(),
        )
    }

    #[test]
    fn test_writes_header_and_quoted_fields() {
        let mut buffer = Vec::new();
        {
            let mut writer = TransactionWriter::new(&mut buffer);
            writer.write(&transaction("$206.80")).unwrap();
            writer.write(&transaction("$1,034.00")).unwrap();
            writer.flush().unwrap();
        }
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "customer_id,customer_name,car_id,car_name,due_date,amount",
                "c-1,Ana,car-1,Golf,\"November 10, 2020\",$206.80",
                "c-1,Ana,car-1,Golf,\"November 10, 2020\",\"$1,034.00\"",
            ]
        );
    }

    #[test]
    fn test_no_rows_writes_nothing() {
        let mut buffer = Vec::new();
        TransactionWriter::new(&mut buffer).flush().unwrap();
        assert!(buffer.is_empty());
    }
}

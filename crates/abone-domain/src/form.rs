//! Category-specific entry forms.
//!
//! Each payment category collects different fields, but all of them collapse
//! into the single flat [`Subscription`] shape before storage. The closed
//! variant set here replaces free-form category strings at the construction
//! boundary; the stored `category` label is derived from the variant.

use std::fmt;

use chrono::NaiveDate;

use crate::{BillingCycle, Currency, Subscription, ValidationError};

/// Category labels as they appear in stored records.
pub mod category {
    pub const ENTERTAINMENT: &str = "Entertainment";
    pub const RENT: &str = "Rent";
    pub const BILLS: &str = "Bills";
    pub const BANK: &str = "Bank";
    pub const TRANSPORT: &str = "Transport";
    pub const PERSONAL: &str = "Personal";
    pub const EDUCATION: &str = "Education";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RentKind {
    Home,
    Shop,
}

impl fmt::Display for RentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RentKind::Home => "Home rent",
            RentKind::Shop => "Shop rent",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillKind {
    Electricity,
    Water,
    Gas,
}

impl fmt::Display for BillKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BillKind::Electricity => "Electricity bill",
            BillKind::Water => "Water bill",
            BillKind::Gas => "Gas bill",
        })
    }
}

/// What a bank entry tracks. Card statements vary month to month, so cards
/// carry no amount and only remind about the due date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BankProduct {
    Card,
    Loan { installment: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationKind {
    School,
    SchoolBus,
    Food,
    PrivateLesson,
    Course,
    Other,
}

impl fmt::Display for EducationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EducationKind::School => "School installment",
            EducationKind::SchoolBus => "School bus",
            EducationKind::Food => "Meals",
            EducationKind::PrivateLesson => "Private lesson",
            EducationKind::Course => "Course",
            EducationKind::Other => "Other",
        })
    }
}

/// One variant per payment category, mirroring the entry screens.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentForm {
    /// A named service (streaming, apps, ...) with full pricing control.
    Service {
        name: String,
        icon: String,
        price: f64,
        currency: Currency,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
    },
    Rent {
        kind: RentKind,
        amount: f64,
        payment_date: NaiveDate,
    },
    /// Amounts vary per statement; bills are date reminders with price 0.
    Bill { kind: BillKind, due_date: NaiveDate },
    Bank {
        bank: String,
        product: BankProduct,
        due_date: NaiveDate,
    },
    Transport {
        monthly_fee: f64,
        last_load_date: NaiveDate,
    },
    Personal {
        name: String,
        price: f64,
        cycle: BillingCycle,
        start_date: NaiveDate,
        duration: Option<u32>,
    },
    Education {
        kind: EducationKind,
        name: String,
        price: f64,
        cycle: BillingCycle,
        start_date: NaiveDate,
        duration: Option<u32>,
    },
}

impl PaymentForm {
    /// Validates the collected input and produces the record to persist.
    pub fn build(self) -> Result<Subscription, ValidationError> {
        let subscription = match self {
            PaymentForm::Service {
                name,
                icon,
                price,
                currency,
                billing_cycle,
                start_date,
            } => Subscription::new(
                name,
                price,
                currency,
                billing_cycle,
                start_date,
                category::ENTERTAINMENT,
            )
            .with_image(icon),
            PaymentForm::Rent {
                kind,
                amount,
                payment_date,
            } => Subscription::new(
                kind.to_string(),
                amount,
                Currency::Local,
                BillingCycle::Monthly,
                payment_date,
                category::RENT,
            )
            .with_image("rent"),
            PaymentForm::Bill { kind, due_date } => Subscription::new(
                kind.to_string(),
                0.0,
                Currency::Local,
                BillingCycle::Monthly,
                due_date,
                category::BILLS,
            )
            .with_image("bills"),
            PaymentForm::Bank {
                bank,
                product,
                due_date,
            } => {
                if bank.trim().is_empty() {
                    return Err(ValidationError::EmptyName);
                }
                let (label, price) = match product {
                    BankProduct::Card => ("Credit card", 0.0),
                    BankProduct::Loan { installment } => ("Loan", installment),
                };
                Subscription::new(
                    format!("{} - {}", bank.trim(), label),
                    price,
                    Currency::Local,
                    BillingCycle::Monthly,
                    due_date,
                    category::BANK,
                )
                .with_image("bank")
            }
            PaymentForm::Transport {
                monthly_fee,
                last_load_date,
            } => Subscription::new(
                "Transit pass",
                monthly_fee,
                Currency::Local,
                BillingCycle::Monthly,
                last_load_date,
                category::TRANSPORT,
            )
            .with_image("bus"),
            PaymentForm::Personal {
                name,
                price,
                cycle,
                start_date,
                duration,
            } => {
                let mut sub = Subscription::new(
                    name,
                    price,
                    Currency::Local,
                    cycle,
                    start_date,
                    category::PERSONAL,
                )
                .with_image("personal");
                sub.duration = duration;
                sub
            }
            PaymentForm::Education {
                kind,
                name,
                price,
                cycle,
                start_date,
                duration,
            } => {
                if name.trim().is_empty() {
                    return Err(ValidationError::EmptyName);
                }
                let mut sub = Subscription::new(
                    format!("{} - {}", name.trim(), kind),
                    price,
                    Currency::Local,
                    cycle,
                    start_date,
                    category::EDUCATION,
                )
                .with_image("education");
                sub.duration = duration;
                sub
            }
        };
        subscription.validate()?;
        Ok(subscription)
    }
}

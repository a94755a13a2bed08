//! Interactive entry forms, one flow per payment category.

use abone_domain::{
    BankProduct, BillKind, BillingCycle, Currency, EducationKind, PaymentForm, RentKind,
};
use chrono::NaiveDate;
use dialoguer::theme::ColorfulTheme;

use crate::cli::context::AppContext;
use crate::cli::{io, output};
use crate::errors::CliError;

pub fn add_payment(
    context: &mut AppContext,
    theme: &ColorfulTheme,
    today: NaiveDate,
) -> Result<(), CliError> {
    let categories = [
        "Entertainment",
        "Rent",
        "Bills",
        "Bank",
        "Transport",
        "Personal",
        "Education",
    ];
    let selection = io::select(theme, "Payment category", &categories)?;

    let form = match categories[selection] {
        "Entertainment" => service_form(theme, today)?,
        "Rent" => rent_form(theme, today)?,
        "Bills" => bill_form(theme, today)?,
        "Bank" => bank_form(theme, today)?,
        "Transport" => transport_form(theme, today)?,
        "Personal" => personal_form(theme, today)?,
        _ => education_form(theme, today)?,
    };

    match form.build() {
        Ok(subscription) => {
            let name = subscription.name.clone();
            context.book.add(subscription)?;
            output::success(format!("Added `{name}`."));
        }
        Err(err) => output::error(format!("Could not add payment: {err}")),
    }
    Ok(())
}

pub fn edit_payment(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let Some(id) = select_record(context, theme, "Which payment should change?")? else {
        return Ok(());
    };
    let Some(existing) = context.book.get(&id).cloned() else {
        return Ok(());
    };

    let mut changed = existing.clone();
    changed.name = io::text_with_default(theme, "Name", &existing.name)?;
    changed.price = io::amount(theme, "Amount", Some(existing.price))?;
    changed.currency = currency_prompt(theme, existing.currency)?;
    changed.billing_cycle = cycle_prompt(theme, &CYCLES_ALL, existing.billing_cycle)?;
    changed.start_date = io::date(theme, "Start date", Some(existing.start_date))?;
    changed.duration = io::optional_duration(theme, "Payments remaining", existing.duration)?;

    match context.book.update(changed) {
        Ok(()) => output::success("Payment updated."),
        Err(err) => output::error(format!("Could not update payment: {err}")),
    }
    Ok(())
}

pub fn remove_payment(context: &mut AppContext, theme: &ColorfulTheme) -> Result<(), CliError> {
    let Some(id) = select_record(context, theme, "Which payment should go?")? else {
        return Ok(());
    };
    let name = context
        .book
        .get(&id)
        .map(|sub| sub.name.clone())
        .unwrap_or_default();
    if io::confirm(theme, &format!("Remove `{name}`?"), false)? {
        context.book.remove(&id)?;
        output::success(format!("Removed `{name}`."));
    }
    Ok(())
}

/// Lets the user pick a stored record; `None` means the list was empty or
/// the user backed out.
fn select_record(
    context: &AppContext,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<Option<String>, CliError> {
    if context.book.is_empty() {
        output::info("No payments tracked yet.");
        return Ok(None);
    }
    let mut labels: Vec<String> = context
        .book
        .subscriptions()
        .iter()
        .map(|sub| format!("{} ({})", sub.name, sub.category))
        .collect();
    labels.push("Back".to_string());
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let selection = io::select(theme, prompt, &refs)?;
    if selection == labels.len() - 1 {
        return Ok(None);
    }
    Ok(context
        .book
        .subscriptions()
        .get(selection)
        .map(|sub| sub.id.clone()))
}

const CYCLES_ALL: [BillingCycle; 3] = [
    BillingCycle::Monthly,
    BillingCycle::Yearly,
    BillingCycle::Weekly,
];
const CYCLES_SHORT_TERM: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Weekly];
const CURRENCIES: [Currency; 3] = [Currency::Local, Currency::Usd, Currency::Eur];

fn cycle_prompt(
    theme: &ColorfulTheme,
    cycles: &[BillingCycle],
    current: BillingCycle,
) -> Result<BillingCycle, CliError> {
    let labels: Vec<String> = cycles.iter().map(BillingCycle::to_string).collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let position = cycles.iter().position(|c| *c == current).unwrap_or(0);
    let selection = io::select_with_default(theme, "Billing cycle", &refs, position)?;
    Ok(cycles[selection])
}

fn currency_prompt(theme: &ColorfulTheme, current: Currency) -> Result<Currency, CliError> {
    let labels: Vec<String> = CURRENCIES.iter().map(Currency::to_string).collect();
    let refs: Vec<&str> = labels.iter().map(String::as_str).collect();
    let position = CURRENCIES.iter().position(|c| *c == current).unwrap_or(0);
    let selection = io::select_with_default(theme, "Currency", &refs, position)?;
    Ok(CURRENCIES[selection])
}

fn service_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let name = io::text(theme, "Service name")?;
    let price = io::amount(theme, "Price", None)?;
    let currency = currency_prompt(theme, Currency::Local)?;
    let billing_cycle = cycle_prompt(theme, &CYCLES_ALL, BillingCycle::Monthly)?;
    let start_date = io::date(theme, "First charge date", Some(today))?;
    Ok(PaymentForm::Service {
        icon: name.trim().to_lowercase(),
        name,
        price,
        currency,
        billing_cycle,
        start_date,
    })
}

fn rent_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let kinds = ["Home", "Shop"];
    let kind = match io::select(theme, "Rent type", &kinds)? {
        1 => RentKind::Shop,
        _ => RentKind::Home,
    };
    let amount = io::amount(theme, "Monthly rent", None)?;
    let payment_date = io::date(theme, "Payment date", Some(today))?;
    Ok(PaymentForm::Rent {
        kind,
        amount,
        payment_date,
    })
}

fn bill_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let kinds = ["Electricity", "Water", "Gas"];
    let kind = match io::select(theme, "Bill type", &kinds)? {
        1 => BillKind::Water,
        2 => BillKind::Gas,
        _ => BillKind::Electricity,
    };
    let due_date = io::date(theme, "Due date", Some(today))?;
    Ok(PaymentForm::Bill { kind, due_date })
}

fn bank_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let bank = io::text(theme, "Bank name")?;
    let products = ["Credit card", "Loan"];
    let product = match io::select(theme, "Product", &products)? {
        1 => BankProduct::Loan {
            installment: io::amount(theme, "Monthly installment", None)?,
        },
        _ => BankProduct::Card,
    };
    let due_date = io::date(theme, "Due date", Some(today))?;
    Ok(PaymentForm::Bank {
        bank,
        product,
        due_date,
    })
}

fn transport_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let monthly_fee = io::amount(theme, "Monthly fee", None)?;
    let last_load_date = io::date(theme, "Last load date", Some(today))?;
    Ok(PaymentForm::Transport {
        monthly_fee,
        last_load_date,
    })
}

fn personal_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let name = io::text(theme, "Description")?;
    let price = io::amount(theme, "Amount", None)?;
    let cycle = cycle_prompt(theme, &CYCLES_SHORT_TERM, BillingCycle::Monthly)?;
    let start_date = io::date(theme, "Start date", Some(today))?;
    let duration = io::optional_duration(theme, "Number of payments", None)?;
    Ok(PaymentForm::Personal {
        name,
        price,
        cycle,
        start_date,
        duration,
    })
}

fn education_form(theme: &ColorfulTheme, today: NaiveDate) -> Result<PaymentForm, CliError> {
    let kinds = [
        "School installment",
        "School bus",
        "Meals",
        "Private lesson",
        "Course",
        "Other",
    ];
    let kind = match io::select(theme, "Education type", &kinds)? {
        0 => EducationKind::School,
        1 => EducationKind::SchoolBus,
        2 => EducationKind::Food,
        3 => EducationKind::PrivateLesson,
        4 => EducationKind::Course,
        _ => EducationKind::Other,
    };
    let name = io::text(theme, "Who or what is this for?")?;
    let price = io::amount(theme, "Amount", None)?;
    let cycle = cycle_prompt(theme, &CYCLES_SHORT_TERM, BillingCycle::Monthly)?;
    let start_date = io::date(theme, "Start date", Some(today))?;
    let duration = io::optional_duration(theme, "Number of payments", None)?;
    Ok(PaymentForm::Education {
        kind,
        name,
        price,
        cycle,
        start_date,
        duration,
    })
}

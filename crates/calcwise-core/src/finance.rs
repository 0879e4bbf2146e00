//! Time-value-of-money helpers
//!
//! Rates are annual percentages (6.5 means 6.5%) compounded monthly. These
//! are only used to attach concrete dollar figures to recommendations; the
//! calculators themselves run in the frontend.

/// Upper bound on any term, simulated or closed-form (100 years)
const MAX_MONTHS: u32 = 1200;

/// Result of simulating a loan to payoff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payoff {
    pub months: u32,
    pub total_interest: f64,
}

fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 100.0 / 12.0
}

/// Month count safe to hand to `powi`
fn term(months: u32) -> i32 {
    months.min(MAX_MONTHS) as i32
}

/// Standard amortized payment: P·r·(1+r)^n / ((1+r)^n − 1)
pub fn monthly_payment(principal: f64, annual_rate: f64, months: u32) -> f64 {
    if principal <= 0.0 || months == 0 {
        return 0.0;
    }
    let n = term(months);
    let r = monthly_rate(annual_rate);
    if r <= 0.0 {
        return principal / n as f64;
    }
    let growth = (1.0 + r).powi(n);
    principal * r * growth / (growth - 1.0)
}

/// Loan principal a fixed monthly payment can support
pub fn principal_for_payment(payment: f64, annual_rate: f64, months: u32) -> f64 {
    if payment <= 0.0 || months == 0 {
        return 0.0;
    }
    let n = term(months);
    let r = monthly_rate(annual_rate);
    if r <= 0.0 {
        return payment * n as f64;
    }
    payment * (1.0 - (1.0 + r).powi(-n)) / r
}

/// Total interest paid over the life of an amortized loan
pub fn total_interest(principal: f64, annual_rate: f64, months: u32) -> f64 {
    let n = term(months);
    (monthly_payment(principal, annual_rate, months) * n as f64 - principal).max(0.0)
}

/// Simulate paying `payment` every month until the balance is gone
///
/// Returns `None` when the payment never covers the monthly interest.
pub fn payoff(principal: f64, annual_rate: f64, payment: f64) -> Option<Payoff> {
    if principal <= 0.0 {
        return Some(Payoff {
            months: 0,
            total_interest: 0.0,
        });
    }
    let r = monthly_rate(annual_rate);
    if payment <= principal * r || payment <= 0.0 {
        return None;
    }

    let mut balance = principal;
    let mut interest_paid = 0.0;
    let mut months = 0;
    while balance > 0.005 && months < MAX_MONTHS {
        let interest = balance * r;
        interest_paid += interest;
        balance = balance + interest - payment;
        months += 1;
    }

    Some(Payoff {
        months,
        total_interest: interest_paid + balance.min(0.0),
    })
}

/// Interest saved (and months shaved) by adding `extra` to a regular payment
pub fn extra_payment_savings(
    principal: f64,
    annual_rate: f64,
    payment: f64,
    extra: f64,
) -> Option<(f64, u32)> {
    let base = payoff(principal, annual_rate, payment)?;
    let faster = payoff(principal, annual_rate, payment + extra)?;
    Some((
        (base.total_interest - faster.total_interest).max(0.0),
        base.months.saturating_sub(faster.months),
    ))
}

/// Future value of a lump sum
pub fn future_value(present: f64, annual_rate: f64, years: f64) -> f64 {
    let months = (years * 12.0).round().clamp(0.0, MAX_MONTHS as f64) as i32;
    present * (1.0 + monthly_rate(annual_rate)).powi(months)
}

/// Future value of a fixed monthly deposit
pub fn future_value_of_series(monthly: f64, annual_rate: f64, months: u32) -> f64 {
    let n = term(months);
    let r = monthly_rate(annual_rate);
    if r <= 0.0 {
        return monthly * n as f64;
    }
    monthly * ((1.0 + r).powi(n) - 1.0) / r
}

/// Monthly deposit needed to grow `present` into `target` over `months`
pub fn required_monthly_contribution(
    target: f64,
    present: f64,
    annual_rate: f64,
    months: u32,
) -> f64 {
    if months == 0 {
        return (target - present).max(0.0);
    }
    let grown = future_value(present, annual_rate, months as f64 / 12.0);
    let gap = target - grown;
    if gap <= 0.0 {
        return 0.0;
    }
    let per_dollar = future_value_of_series(1.0, annual_rate, months);
    if per_dollar <= 0.0 {
        return gap;
    }
    gap / per_dollar
}

/// `part` as a percentage of `whole`, if `whole` is positive
pub fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole > 0.0 && part.is_finite() {
        Some(part / whole * 100.0)
    } else {
        None
    }
}

/// Compound annual growth rate between two values
pub fn cagr(start: f64, end: f64, years: f64) -> Option<f64> {
    if start <= 0.0 || end < 0.0 || years <= 0.0 {
        return None;
    }
    Some(((end / start).powf(1.0 / years) - 1.0) * 100.0)
}

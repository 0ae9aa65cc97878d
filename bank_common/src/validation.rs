use crate::errors::ValidationError;
use crate::requests::{TransactionRequest, ValidTransaction};
use crate::types::{AccountNumber, Amount};

impl TransactionRequest {
    /// **Basic input validation for a deposit or a withdrawal**
    ///
    /// Checks for:
    /// - A missing account number;
    /// - A missing amount;
    /// - An amount that is not finite, or is negative.
    ///
    /// A zero account number or amount counts as missing.
    pub fn validate(&self) -> Result<ValidTransaction, ValidationError> {
        let account_number = self
            .account_number
            .filter(|&account_number| account_number != 0)
            .ok_or(ValidationError::MissingField("account_number"))?;
        let amount = self
            .amount
            .ok_or(ValidationError::MissingField("amount"))?;

        Ok(ValidTransaction {
            account_number,
            amount: validate_amount(amount)?,
        })
    }
}

/// An amount must be finite and positive; zero counts as missing.
pub fn validate_amount(amount: Amount) -> Result<Amount, ValidationError> {
    if !amount.is_finite() {
        Err(ValidationError::NonFiniteAmount)
    } else if amount < 0.0 {
        Err(ValidationError::NegativeAmount(amount))
    } else if amount == 0.0 {
        Err(ValidationError::MissingField("amount"))
    } else {
        Ok(amount)
    }
}

/// Parses an account number from a URL path segment or a CLI argument.
pub fn parse_account_number(raw: &str) -> Result<AccountNumber, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidAccountNumber(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(amount: Option<f64>, account_number: Option<i64>) -> TransactionRequest {
        TransactionRequest {
            amount,
            account_number,
        }
    }

    #[test]
    fn valid_request_passes() {
        assert_eq!(
            Ok(ValidTransaction {
                account_number: 1,
                amount: 100.0
            }),
            request(Some(100.0), Some(1)).validate()
        );
    }

    #[test]
    fn zero_amount_counts_as_missing() {
        assert_eq!(
            Err(ValidationError::MissingField("amount")),
            request(Some(0.0), Some(1)).validate()
        );
        assert_eq!(
            Err(ValidationError::MissingField("amount")),
            request(Some(-0.0), Some(1)).validate()
        );
    }

    #[test]
    fn zero_account_number_counts_as_missing() {
        assert_eq!(
            Err(ValidationError::MissingField("account_number")),
            request(Some(5.0), Some(0)).validate()
        );
    }

    #[test]
    fn missing_fields_fail() {
        assert_eq!(
            Err(ValidationError::MissingField("account_number")),
            request(Some(1.0), None).validate()
        );
        assert_eq!(
            Err(ValidationError::MissingField("amount")),
            request(None, Some(1)).validate()
        );
    }

    #[test]
    fn negative_amount_fails() {
        assert_eq!(
            Err(ValidationError::NegativeAmount(-0.5)),
            request(Some(-0.5), Some(1)).validate()
        );
    }

    #[test]
    fn non_finite_amount_fails() {
        assert_eq!(Err(ValidationError::NonFiniteAmount), validate_amount(f64::NAN));
        assert_eq!(
            Err(ValidationError::NonFiniteAmount),
            validate_amount(f64::INFINITY)
        );
    }

    #[test]
    fn account_number_parses() {
        assert_eq!(Ok(42), parse_account_number("42"));
        assert_eq!(Ok(-7), parse_account_number(" -7 "));
        assert_eq!(
            Err(ValidationError::InvalidAccountNumber("abc".to_string())),
            parse_account_number("abc")
        );
    }
}

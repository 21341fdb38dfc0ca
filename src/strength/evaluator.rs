//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use super::bonus::bonus_score;
use super::report::{StrengthLevel, StrengthReport};
use super::requirements::REQUIREMENTS;

/// Maximum attainable raw score: 5 base requirements + 4 half-point bonuses.
const MAX_SCORE: f32 = 7.0;

/// Debounce window before a scheduled evaluation runs.
#[cfg(feature = "async")]
const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

const EMPTY_FEEDBACK: &str = "Enter a password";
const ALL_MET_FEEDBACK: &str = "Password meets all requirements";

/// Evaluates password strength and returns a fresh report.
///
/// Pure and total: any string input yields a report, nothing is retained
/// between calls, and the requirement table is never mutated.
///
/// Scoring: one point per met base requirement, plus half-point bonuses
/// for extra length, absence of repeated runs, and absence of common
/// patterns. The level thresholds are applied to the unrounded
/// percentage; `score` and `percentage` are rounded at output only.
#[must_use]
pub fn evaluate(password: &SecretString) -> StrengthReport {
    let pwd = password.expose_secret();

    if pwd.is_empty() {
        return StrengthReport {
            score: 0,
            level: StrengthLevel::Weak,
            percentage: 0,
            feedback: vec![EMPTY_FEEDBACK.to_string()],
        };
    }

    let mut feedback = Vec::new();
    let mut raw = 0.0f32;

    for requirement in &REQUIREMENTS {
        if requirement.is_met(pwd) {
            raw += 1.0;
        } else {
            feedback.push(requirement.label.to_string());
        }
    }

    raw += bonus_score(pwd);

    let percentage = (raw / MAX_SCORE * 100.0).min(100.0);
    let level = StrengthLevel::from_percentage(percentage);

    if feedback.is_empty() {
        feedback.push(ALL_MET_FEEDBACK.to_string());
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = raw,
        level = level.label(),
        "password strength evaluated"
    );

    StrengthReport {
        score: raw.round() as u8,
        level,
        percentage: percentage.round() as u8,
        feedback,
    }
}

/// Debounced async evaluation that sends its report via channel.
///
/// Waits out a short debounce window, racing it against `token`; a
/// cancellation during the window suppresses the evaluation entirely.
/// Typical use is one task per keystroke, cancelling the previous one.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("strength evaluation scheduled");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("strength evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let report = evaluate(password);

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("failed to send strength report: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_evaluation_sends_nothing() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_tx(&secret("TestPass123!"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_uncancelled_evaluation_delivers_report() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let password = secret("TestPass123!");

        evaluate_tx(&password, token, tx).await;

        let report = rx.recv().await.expect("should receive a report");
        assert_eq!(report, evaluate(&password));
    }
}

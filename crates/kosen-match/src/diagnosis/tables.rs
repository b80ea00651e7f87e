use super::domain::{Interest, Subject};

/// Substrings that mark a department as serving an interest.
pub(crate) fn department_keywords(interest: Interest) -> &'static [&'static str] {
    match interest {
        Interest::Mechanical => &["機械", "ロボット"],
        Interest::Electrical => &["電気", "電子"],
        Interest::Information => &["情報", "知能"],
        Interest::Chemical => &["化学", "物質", "生物"],
        Interest::Architecture => &["建築", "建設", "都市", "環境"],
        Interest::Marine => &["商船", "海洋", "船舶"],
    }
}

/// Interests a strength in `subject` carries over to.
pub(crate) fn correlated_interests(subject: Subject) -> &'static [Interest] {
    match subject {
        Subject::Math => &[
            Interest::Information,
            Interest::Electrical,
            Interest::Architecture,
        ],
        Subject::Physics => &[Interest::Mechanical, Interest::Electrical, Interest::Marine],
        Subject::Chemistry | Subject::Biology => &[Interest::Chemical],
    }
}

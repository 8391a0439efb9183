use crate::session::Session;

/// Where a session stands relative to the betting gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdmissionStatus {
    Disconnected,
    Locked,
    Authorized,
}

/// Locked iff a wallet is connected and no verification has succeeded this
/// session. A disconnected session is not locked; downstream validation
/// rejects it for the distinct connect-wallet reason.
pub fn is_access_locked(session: &Session) -> bool {
    session.connected() && !session.is_authorized()
}

pub fn admission_status(session: &Session) -> AdmissionStatus {
    if !session.connected() {
        AdmissionStatus::Disconnected
    } else if session.is_authorized() {
        AdmissionStatus::Authorized
    } else {
        AdmissionStatus::Locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_tracks_the_session_machine() {
        let mut session = Session::disconnected();
        assert_eq!(admission_status(&session), AdmissionStatus::Disconnected);
        assert!(!is_access_locked(&session));

        session.connect("0xabc");
        assert_eq!(admission_status(&session), AdmissionStatus::Locked);
        assert!(is_access_locked(&session));

        session.mark_authorized();
        assert_eq!(admission_status(&session), AdmissionStatus::Authorized);
        assert!(!is_access_locked(&session));

        session.disconnect();
        assert_eq!(admission_status(&session), AdmissionStatus::Disconnected);
    }
}

/// Tag attached to an outgoing request: a sequence number plus the term or
/// identifier the request was issued for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    seq: u64,
    key: String,
}

impl RequestTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// The filter term or product identifier this request carries.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Issues tickets and remembers which one is current.
#[derive(Debug, Default)]
pub(crate) struct TicketCounter {
    next_seq: u64,
    current: Option<RequestTicket>,
}

impl TicketCounter {
    /// Issues a new ticket, superseding any outstanding one.
    pub(crate) fn issue(&mut self, key: &str) -> RequestTicket {
        self.next_seq += 1;
        let ticket = RequestTicket {
            seq: self.next_seq,
            key: key.to_owned(),
        };
        self.current = Some(ticket.clone());
        ticket
    }

    /// Consumes `ticket` if it is still current. Returns `false` for
    /// superseded or invalidated tickets.
    pub(crate) fn settle(&mut self, ticket: &RequestTicket) -> bool {
        if self.current.as_ref() == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn invalidate(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let mut counter = TicketCounter::default();
        let a = counter.issue("a");
        let b = counter.issue("a");
        assert!(b.seq() > a.seq());
        assert_ne!(a, b);
    }

    #[test]
    fn superseded_ticket_does_not_settle() {
        let mut counter = TicketCounter::default();
        let old = counter.issue("lamp");
        let new = counter.issue("lamps");
        assert!(!counter.settle(&old));
        assert!(counter.settle(&new));
    }

    #[test]
    fn ticket_settles_only_once() {
        let mut counter = TicketCounter::default();
        let t = counter.issue("x");
        assert!(counter.settle(&t));
        assert!(!counter.settle(&t));
    }

    #[test]
    fn invalidate_drops_outstanding_ticket() {
        let mut counter = TicketCounter::default();
        let t = counter.issue("x");
        counter.invalidate();
        assert!(!counter.settle(&t));
    }
}

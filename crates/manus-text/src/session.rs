//! Recognition session bookkeeping
//!
//! In-memory per-session statistics and the ordered gesture record. The
//! persistence backend is an external collaborator; records carry a compact
//! byte encoding so that layer can store them without knowing these types.
//! All timestamps are caller-supplied.

use manus_core::{ManusError, ManusResult, SessionTime, Symbol, SymbolEvent};

/// One recorded recognition
#[derive(Debug, Clone, PartialEq)]
pub struct GestureRecord {
    pub symbol: Symbol,
    pub confidence: f32,
    pub at: SessionTime,
}

impl GestureRecord {
    pub fn new(symbol: Symbol, confidence: f32, at: SessionTime) -> Self {
        Self {
            symbol,
            confidence,
            at,
        }
    }

    /// Encode for the persistence layer
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&self.at.as_millis().to_le_bytes());
        buf.extend_from_slice(&self.confidence.to_le_bytes());

        let label = self.symbol.as_str().as_bytes();
        buf.push(label.len() as u8);
        buf.extend_from_slice(label);
        buf
    }

    /// Decode one record, returning it and the bytes consumed
    pub fn decode(buf: &[u8]) -> Option<(Self, usize)> {
        if buf.len() < 13 {
            return None;
        }

        let at = SessionTime::from_millis(i64::from_le_bytes(buf[0..8].try_into().ok()?));
        let confidence = f32::from_le_bytes(buf[8..12].try_into().ok()?);
        let label_len = buf[12] as usize;
        let mut offset = 13;

        if buf.len() < offset + label_len {
            return None;
        }
        let label = std::str::from_utf8(&buf[offset..offset + label_len]).ok()?;
        offset += label_len;

        let symbol = match label {
            "SPACE" => Symbol::Space,
            "DELETE" => Symbol::Delete,
            letter => Symbol::from_char(letter.chars().next()?).ok()?,
        };

        Some((
            GestureRecord {
                symbol,
                confidence,
                at,
            },
            offset,
        ))
    }
}

/// Summary produced when a session ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSummary {
    pub total_gestures: u32,
    pub duration: std::time::Duration,
}

/// In-memory recognition-session recorder
#[derive(Debug, Default)]
pub struct SessionRecorder {
    started_at: Option<SessionTime>,
    records: Vec<GestureRecord>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a session at the given time
    pub fn start(&mut self, now: SessionTime) -> ManusResult<()> {
        if self.started_at.is_some() {
            return Err(ManusError::SessionAlreadyActive);
        }
        self.started_at = Some(now);
        self.records.clear();
        Ok(())
    }

    /// Record one confirmed event
    pub fn record(&mut self, event: &SymbolEvent, now: SessionTime) -> ManusResult<()> {
        if self.started_at.is_none() {
            return Err(ManusError::SessionNotStarted);
        }
        self.records
            .push(GestureRecord::new(event.symbol, event.confidence, now));
        Ok(())
    }

    /// End the session, producing its summary
    pub fn end(&mut self, now: SessionTime) -> ManusResult<SessionSummary> {
        let started_at = self.started_at.take().ok_or(ManusError::SessionNotStarted)?;
        Ok(SessionSummary {
            total_gestures: self.records.len() as u32,
            duration: now - started_at,
        })
    }

    pub fn is_active(&self) -> bool {
        self.started_at.is_some()
    }

    /// Records so far, oldest first
    pub fn records(&self) -> &[GestureRecord] {
        &self.records
    }

    /// Most recent records, newest-last
    pub fn recent(&self, count: usize) -> &[GestureRecord] {
        let start = self.records.len().saturating_sub(count);
        &self.records[start..]
    }

    /// Encode the full record list for the persistence layer
    pub fn encode_records(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&(self.records.len() as u16).to_le_bytes());
        for record in &self.records {
            buf.extend_from_slice(&record.encode());
        }
        buf
    }

    /// Decode a record list previously produced by `encode_records`
    pub fn decode_records(buf: &[u8]) -> Option<Vec<GestureRecord>> {
        if buf.len() < 2 {
            return None;
        }
        let count = u16::from_le_bytes(buf[0..2].try_into().ok()?) as usize;
        let mut offset = 2;

        let mut records = Vec::with_capacity(count);
        for _ in 0..count {
            let (record, used) = GestureRecord::decode(&buf[offset..])?;
            offset += used;
            records.push(record);
        }
        Some(records)
    }
}

//! In-memory notice board, maintenance queue and amenity catalog.
//!
//! [`Board`] owns every list the dashboard shows. It is never persisted;
//! all mutations go through the transition methods below so that callers
//! holding it behind a lock cannot leave it half-updated.

use chrono::{TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::prompt::Tone;
use crate::triage::{Priority, TriageResult};
use crate::types::{new_id, EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Author recorded on notices published through the assistant.
pub const ASSISTED_AUTHOR: &str = "Síndico (via IA)";

/// Location recorded when a maintenance request omits one.
pub const UNKNOWN_LOCATION: &str = "Não informado";

/// Maximum length of a notice or request title.
pub const MAX_TITLE_LENGTH: usize = 200;

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub important: bool,
    pub published_at: Timestamp,
}

/// Lifecycle of a maintenance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Open,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceRequest {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub priority: Priority,
    pub status: MaintenanceStatus,
    pub reported_at: Timestamp,
}

/// A bookable common area.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Amenity {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub capacity: u32,
    pub image_url: String,
    /// Booking fee in BRL; zero for free areas.
    pub price: f64,
}

/// Input for [`Board::publish_notice`].
#[derive(Debug, Clone)]
pub struct NewNotice {
    pub title: String,
    pub content: String,
    pub tone: Tone,
}

/// Input for [`Board::open_request`].
#[derive(Debug, Clone)]
pub struct NewMaintenanceRequest {
    pub title: String,
    pub description: String,
    pub location: Option<String>,
}

impl NewMaintenanceRequest {
    /// Check the same title and description rules [`Board::open_request`]
    /// applies, without touching the board.
    pub fn validate(&self) -> Result<(), CoreError> {
        require_field("Title", &self.title, MAX_TITLE_LENGTH)?;
        if self.description.trim().is_empty() {
            return Err(CoreError::Validation("Description must not be empty".into()));
        }
        Ok(())
    }
}

/// Counters shown on the dashboard landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub notices: usize,
    pub important_notices: usize,
    pub open_requests: usize,
    pub in_progress_requests: usize,
    pub amenities: usize,
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct Board {
    notices: Vec<Notice>,
    requests: Vec<MaintenanceRequest>,
    amenities: Vec<Amenity>,
}

impl Board {
    /// A board pre-populated with the demo notices, tickets and amenities.
    pub fn seeded() -> Self {
        let notices = vec![
            Notice {
                id: new_id(),
                title: "Manutenção Preventiva - Elevadores".into(),
                content: "Informamos que na próxima terça-feira realizaremos a manutenção \
                          preventiva nos elevadores do bloco B. O serviço ocorrerá das 09h às \
                          14h. Pedimos desculpas pelo transtorno e agradecemos a compreensão."
                    .into(),
                author: "Administração".into(),
                important: true,
                published_at: demo_date(10),
            },
            Notice {
                id: new_id(),
                title: "Assembleia Geral Ordinária".into(),
                content: "Convocamos todos os condôminos para a assembleia geral que ocorrerá \
                          no dia 20/05 no salão de festas."
                    .into(),
                author: "Síndico".into(),
                important: false,
                published_at: demo_date(8),
            },
        ];

        let requests = vec![
            MaintenanceRequest {
                id: new_id(),
                title: "Vazamento na garagem".into(),
                description: "Poça d'água perto da vaga 42, parece vir do teto.".into(),
                location: "Garagem Subsolo".into(),
                category: "Hidráulica".into(),
                priority: Priority::High,
                status: MaintenanceStatus::Open,
                reported_at: Utc::now(),
            },
            MaintenanceRequest {
                id: new_id(),
                title: "Lâmpada queimada no corredor".into(),
                description: "A luz do corredor do 3º andar está piscando e apagou.".into(),
                location: "Bloco A - 3º Andar".into(),
                category: "Elétrica".into(),
                priority: Priority::Low,
                status: MaintenanceStatus::Completed,
                reported_at: demo_date(10),
            },
        ];

        let amenities = vec![
            Amenity {
                id: new_id(),
                name: "Salão de Festas".into(),
                description: "Espaço climatizado com cozinha completa, mesas e cadeiras para 50 \
                              pessoas."
                    .into(),
                capacity: 50,
                image_url: "https://picsum.photos/800/400?random=1".into(),
                price: 150.0,
            },
            Amenity {
                id: new_id(),
                name: "Churrasqueira Gourmet".into(),
                description: "Área externa coberta com churrasqueira, forno de pizza e freezer."
                    .into(),
                capacity: 20,
                image_url: "https://picsum.photos/800/400?random=2".into(),
                price: 80.0,
            },
            Amenity {
                id: new_id(),
                name: "Academia".into(),
                description: "Equipamentos modernos para musculação e aeróbico.".into(),
                capacity: 10,
                image_url: "https://picsum.photos/800/400?random=3".into(),
                price: 0.0,
            },
        ];

        Self {
            notices,
            requests,
            amenities,
        }
    }

    // ---- queries ----

    /// Notices, newest first.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Maintenance requests, newest first.
    pub fn requests(&self) -> &[MaintenanceRequest] {
        &self.requests
    }

    pub fn amenities(&self) -> &[Amenity] {
        &self.amenities
    }

    pub fn summary(&self) -> BoardSummary {
        let count_status = |status| self.requests.iter().filter(|r| r.status == status).count();
        BoardSummary {
            notices: self.notices.len(),
            important_notices: self.notices.iter().filter(|n| n.important).count(),
            open_requests: count_status(MaintenanceStatus::Open),
            in_progress_requests: count_status(MaintenanceStatus::InProgress),
            amenities: self.amenities.len(),
        }
    }

    // ---- transitions ----

    /// Publish a notice at the top of the board.
    ///
    /// Urgent-tone notices are flagged important.
    pub fn publish_notice(&mut self, input: NewNotice) -> Result<Notice, CoreError> {
        let title = require_field("Title", &input.title, MAX_TITLE_LENGTH)?;
        let content = input.content.trim();
        if content.is_empty() {
            return Err(CoreError::Validation("Content must not be empty".into()));
        }

        let notice = Notice {
            id: new_id(),
            title,
            content: content.to_string(),
            author: ASSISTED_AUTHOR.to_string(),
            important: input.tone == Tone::Urgent,
            published_at: Utc::now(),
        };
        self.notices.insert(0, notice.clone());
        Ok(notice)
    }

    /// Remove a notice, returning it.
    pub fn remove_notice(&mut self, id: EntityId) -> Result<Notice, CoreError> {
        let index = self
            .notices
            .iter()
            .position(|n| n.id == id)
            .ok_or(CoreError::NotFound {
                entity: "Notice",
                id,
            })?;
        Ok(self.notices.remove(index))
    }

    /// Open a maintenance request with the given classification.
    pub fn open_request(
        &mut self,
        input: NewMaintenanceRequest,
        triage: TriageResult,
    ) -> Result<MaintenanceRequest, CoreError> {
        input.validate()?;
        let title = input.title.trim().to_string();
        let description = input.description.trim();
        let location = input
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LOCATION);

        let request = MaintenanceRequest {
            id: new_id(),
            title,
            description: description.to_string(),
            location: location.to_string(),
            category: triage.category,
            priority: triage.priority,
            status: MaintenanceStatus::Open,
            reported_at: Utc::now(),
        };
        self.requests.insert(0, request.clone());
        Ok(request)
    }

    /// Move a maintenance request to another status.
    pub fn set_request_status(
        &mut self,
        id: EntityId,
        status: MaintenanceStatus,
    ) -> Result<MaintenanceRequest, CoreError> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(CoreError::NotFound {
                entity: "MaintenanceRequest",
                id,
            })?;
        if request.status == status {
            return Err(CoreError::Conflict(format!(
                "Maintenance request is already {status:?}"
            )));
        }
        request.status = status;
        Ok(request.clone())
    }
}

fn require_field(field: &str, value: &str, max_len: usize) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(trimmed.to_string())
}

fn demo_date(day: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 5, day, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

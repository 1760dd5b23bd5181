//! The registry service object

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

use chrono::{NaiveDate, Utc};

use core_kernel::{
    resolve_report_date, ClaimId, ClientId, FoundItemId, IdSequence, LostItemId,
};
use domain_claims::{
    apply_status_update, Claim, ClaimError, ClaimStatus, OwnershipProof, StatusChange, StatusUpdate,
};
use domain_items::{FoundItem, ItemDetails, ItemQuery, LostItem, SearchResults};
use domain_matching::{MatchCandidate, Matcher};
use crate::analytics::RegistrySummary;
use crate::client::{ClientAccount, NewClient};
use crate::config::RegistryConfig;
use crate::error::RegistryError;
use crate::snapshot::RegistrySnapshot;

/// Reports filed by a single client
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientReports<'a> {
    pub lost: Vec<&'a LostItem>,
    pub found: Vec<&'a FoundItem>,
}

/// Owner of every collection and identifier sequence in the lost & found
///
/// All mutation goes through `&mut self`, so a registry shared between
/// actors needs a single writer (or a lock) around it. Matching only reads.
#[derive(Debug, Clone)]
pub struct Registry {
    config: RegistryConfig,
    matcher: Matcher,
    lost_items: Vec<LostItem>,
    found_items: Vec<FoundItem>,
    claims: Vec<Claim>,
    clients: Vec<ClientAccount>,
    lost_ids: IdSequence<LostItemId>,
    found_ids: IdSequence<FoundItemId>,
    claim_ids: IdSequence<ClaimId>,
    client_ids: IdSequence<ClientId>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl Registry {
    /// Creates an empty registry
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            matcher: Matcher::new(config.matching),
            config,
            lost_items: Vec::new(),
            found_items: Vec::new(),
            claims: Vec::new(),
            clients: Vec::new(),
            lost_ids: IdSequence::new(),
            found_ids: IdSequence::new(),
            claim_ids: IdSequence::new(),
            client_ids: IdSequence::new(),
        }
    }

    /// Rebuilds a registry from a saved snapshot
    ///
    /// Each identifier sequence resumes at the largest stored identifier plus
    /// one. A snapshot that repeats an identifier within one namespace is
    /// rejected.
    pub fn restore(snapshot: RegistrySnapshot, config: RegistryConfig) -> Result<Self, RegistryError> {
        ensure_unique("lost item", snapshot.lost_items.iter().map(|item| item.id))?;
        ensure_unique("found item", snapshot.found_items.iter().map(|item| item.id))?;
        ensure_unique("claim", snapshot.claims.iter().map(|claim| claim.id))?;
        ensure_unique("client", snapshot.clients.iter().map(|client| client.client_id))?;

        let registry = Self {
            matcher: Matcher::new(config.matching),
            config,
            lost_ids: IdSequence::resume_after(snapshot.lost_items.iter().map(|item| item.id)),
            found_ids: IdSequence::resume_after(snapshot.found_items.iter().map(|item| item.id)),
            claim_ids: IdSequence::resume_after(snapshot.claims.iter().map(|claim| claim.id)),
            client_ids: IdSequence::resume_after(snapshot.clients.iter().map(|client| client.client_id)),
            lost_items: snapshot.lost_items,
            found_items: snapshot.found_items,
            claims: snapshot.claims,
            clients: snapshot.clients,
        };

        tracing::info!(
            lost_items = registry.lost_items.len(),
            found_items = registry.found_items.len(),
            claims = registry.claims.len(),
            clients = registry.clients.len(),
            "Registry restored"
        );

        Ok(registry)
    }

    /// Copies every collection out for saving
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            lost_items: self.lost_items.clone(),
            found_items: self.found_items.clone(),
            claims: self.claims.clone(),
            clients: self.clients.clone(),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Clients
    // ------------------------------------------------------------------

    /// Registers a new client; usernames are unique regardless of case
    pub fn register_client(&mut self, form: NewClient) -> Result<ClientId, RegistryError> {
        form.validate()?;
        if self.client_by_username(&form.username).is_some() {
            return Err(RegistryError::DuplicateUsername(form.username));
        }

        let client_id = self.client_ids.allocate();
        let account = form.into_account(client_id, today());
        tracing::info!(%client_id, username = %account.username, "Client registered");
        self.clients.push(account);
        Ok(client_id)
    }

    pub fn client(&self, client_id: ClientId) -> Result<&ClientAccount, RegistryError> {
        self.clients
            .iter()
            .find(|client| client.client_id == client_id)
            .ok_or(RegistryError::ClientNotFound(client_id))
    }

    pub fn client_by_username(&self, username: &str) -> Option<&ClientAccount> {
        let username = username.trim().to_lowercase();
        self.clients
            .iter()
            .find(|client| client.username.to_lowercase() == username)
    }

    pub fn clients(&self) -> &[ClientAccount] {
        &self.clients
    }

    // ------------------------------------------------------------------
    // Reports
    // ------------------------------------------------------------------

    /// Files an open lost report
    ///
    /// A blank or unreadable `date_lost` is recorded as today.
    pub fn report_lost(
        &mut self,
        reporter: ClientId,
        details: ItemDetails,
        location: &str,
        date_lost: Option<&str>,
    ) -> Result<LostItemId, RegistryError> {
        details.validate()?;
        let party = self.client(reporter)?.party_ref();
        let date_lost = resolve_report_date(date_lost, today());

        let id = self.lost_ids.allocate();
        let item = LostItem::report(id, details, location, date_lost, party);
        tracing::info!(lost_item_id = %id, item_name = %item.item_name, %date_lost, "Lost item reported");
        self.lost_items.push(item);
        Ok(id)
    }

    /// Files an available found report
    ///
    /// A blank or unreadable `date_found` is recorded as today.
    pub fn report_found(
        &mut self,
        finder: ClientId,
        details: ItemDetails,
        location: &str,
        date_found: Option<&str>,
    ) -> Result<FoundItemId, RegistryError> {
        details.validate()?;
        let party = self.client(finder)?.party_ref();
        let date_found = resolve_report_date(date_found, today());

        let id = self.found_ids.allocate();
        let item = FoundItem::report(id, details, location, date_found, party);
        tracing::info!(found_item_id = %id, item_name = %item.item_name, %date_found, "Found item reported");
        self.found_items.push(item);
        Ok(id)
    }

    /// Lost and found reports filed by one client
    pub fn reports_by(&self, client_id: ClientId) -> Result<ClientReports<'_>, RegistryError> {
        let username = &self.client(client_id)?.username;
        Ok(ClientReports {
            lost: self
                .lost_items
                .iter()
                .filter(|item| item.reporter.is_user(username))
                .collect(),
            found: self
                .found_items
                .iter()
                .filter(|item| item.finder.is_user(username))
                .collect(),
        })
    }

    pub fn search(&self, query: &ItemQuery) -> SearchResults<'_> {
        query.run(&self.lost_items, &self.found_items)
    }

    pub fn available_found_items(&self) -> Vec<&FoundItem> {
        self.found_items.iter().filter(|item| item.is_available()).collect()
    }

    pub fn lost_items(&self) -> &[LostItem] {
        &self.lost_items
    }

    pub fn found_items(&self) -> &[FoundItem] {
        &self.found_items
    }

    pub fn lost_item(&self, id: LostItemId) -> Option<&LostItem> {
        self.lost_items.iter().find(|item| item.id == id)
    }

    pub fn found_item(&self, id: FoundItemId) -> Option<&FoundItem> {
        self.found_items.iter().find(|item| item.id == id)
    }

    /// Closes a lost case
    ///
    /// Returns `false` when the case was already closed.
    pub fn close_case(&mut self, id: LostItemId) -> Result<bool, RegistryError> {
        let item = self
            .lost_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(RegistryError::LostItemNotFound(id))?;

        let closed = item.close();
        if closed {
            tracing::info!(lost_item_id = %id, "Lost case closed");
        }
        Ok(closed)
    }

    /// Closes a lost case identified by typed input
    pub fn close_case_from_input(&mut self, raw_id: &str) -> Result<bool, RegistryError> {
        let id = raw_id.parse::<LostItemId>()?;
        self.close_case(id)
    }

    // ------------------------------------------------------------------
    // Claims
    // ------------------------------------------------------------------

    /// Files a claim against an available found item
    pub fn file_claim(
        &mut self,
        claimant: ClientId,
        found_item_id: FoundItemId,
        proof: &str,
    ) -> Result<ClaimId, RegistryError> {
        let party = self.client(claimant)?.party_ref();
        let found_item = self
            .found_item(found_item_id)
            .ok_or(ClaimError::FoundItemNotFound(found_item_id))?;
        let proof = OwnershipProof::with_min_length(proof, self.config.min_proof_length)?;

        let claim = Claim::file_against(found_item, self.claim_ids.peek(), party, proof, today())?;
        let claim_id = self.claim_ids.allocate();
        tracing::info!(%claim_id, %found_item_id, claimant = %claim.claimant.username, "Claim submitted");
        self.claims.push(claim);
        Ok(claim_id)
    }

    /// Files a claim where the found item id is typed input
    pub fn file_claim_from_input(
        &mut self,
        claimant: ClientId,
        raw_found_item_id: &str,
        proof: &str,
    ) -> Result<ClaimId, RegistryError> {
        let found_item_id = raw_found_item_id.parse::<FoundItemId>()?;
        self.file_claim(claimant, found_item_id, proof)
    }

    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn claim(&self, id: ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| claim.id == id)
    }

    /// Claims filed by one client
    pub fn claims_by(&self, client_id: ClientId) -> Result<Vec<&Claim>, RegistryError> {
        let username = &self.client(client_id)?.username;
        Ok(self
            .claims
            .iter()
            .filter(|claim| claim.claimant.is_user(username))
            .collect())
    }

    /// Applies an administrator's status decision
    pub fn update_claim_status(&mut self, update: StatusUpdate) -> Result<StatusChange, RegistryError> {
        Ok(apply_status_update(&mut self.claims, &mut self.found_items, update)?)
    }

    /// Applies a status decision where the claim id is typed input
    pub fn update_claim_status_from_input(
        &mut self,
        raw_claim_id: &str,
        target: ClaimStatus,
        note: Option<&str>,
    ) -> Result<StatusChange, RegistryError> {
        let mut update = StatusUpdate::parse(raw_claim_id, target)?;
        if let Some(note) = note {
            update = update.with_note(note);
        }
        self.update_claim_status(update)
    }

    // ------------------------------------------------------------------
    // Matching and analytics
    // ------------------------------------------------------------------

    /// Ranked lost/found pairings for review
    pub fn find_matches(&self) -> Vec<MatchCandidate> {
        self.matcher.find_matches(&self.lost_items, &self.found_items)
    }

    pub fn summary(&self) -> RegistrySummary {
        RegistrySummary::compute(&self.lost_items, &self.found_items, &self.claims, self.clients.len())
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn ensure_unique<T>(namespace: &str, ids: impl Iterator<Item = T>) -> Result<(), RegistryError>
where
    T: Copy + Eq + Hash + Display,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RegistryError::invalid_input(format!(
                "snapshot repeats {} id {}",
                namespace, id
            )));
        }
    }
    Ok(())
}

//! In-memory application state.
//!
//! The club's remote data source is modeled as a process-wide store behind
//! `RwLock`s. Every mutation goes through a method here so the API layer
//! stays a thin validation-and-call shell.

use chrono::{DateTime, NaiveDate, Utc};
use shared_types::{
    AccountSummary, Announcement, AnnouncementInput, AppError, AuthUser, Booking, BookingStatus,
    ClubStats, Coupon, CouponInput, Court, CourtInput, CreateBookingRequest, PayBookingRequest,
    Payment, RegisterRequest, Role,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Internal account record. `password_hash` never leaves the store.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: i64,
    pub display_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub registered_at: DateTime<Utc>,
    pub member_since: Option<DateTime<Utc>>,
}

impl UserRecord {
    pub fn auth_user(&self) -> AuthUser {
        AuthUser {
            id: self.id,
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            avatar_url: self.avatar_url.clone(),
            registered_at: self.registered_at,
            member_since: self.member_since,
        }
    }

    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            id: self.id,
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            role: self.role.as_str().to_string(),
            registered_at: self.registered_at,
        }
    }
}

/// Server-side record of an issued refresh token (hash only).
#[derive(Debug, Clone)]
pub struct RefreshRecord {
    pub user_id: i64,
    pub expires_at: DateTime<Utc>,
    pub revoked: bool,
}

pub struct AppStore {
    users: RwLock<HashMap<i64, UserRecord>>,
    refresh_tokens: RwLock<HashMap<String, RefreshRecord>>,
    courts: RwLock<HashMap<i64, Court>>,
    bookings: RwLock<HashMap<i64, Booking>>,
    coupons: RwLock<HashMap<i64, Coupon>>,
    announcements: RwLock<HashMap<i64, Announcement>>,
    payments: RwLock<Vec<Payment>>,
    next_id: AtomicI64,
}

static STORE: LazyLock<AppStore> = LazyLock::new(AppStore::new);

/// The process-wide store used by the server functions.
pub fn store() -> &'static AppStore {
    &STORE
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AppStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            refresh_tokens: RwLock::new(HashMap::new()),
            courts: RwLock::new(HashMap::new()),
            bookings: RwLock::new(HashMap::new()),
            coupons: RwLock::new(HashMap::new()),
            announcements: RwLock::new(HashMap::new()),
            payments: RwLock::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    // ── Accounts ────────────────────────────────────────────────────────

    /// Insert a new account. The caller supplies the already-hashed
    /// password and the initial role.
    pub fn register(
        &self,
        req: &RegisterRequest,
        password_hash: String,
        role: Role,
    ) -> Result<UserRecord, AppError> {
        let mut users = write(&self.users);
        if users
            .values()
            .any(|u| u.email.eq_ignore_ascii_case(&req.email))
        {
            return Err(AppError::conflict(
                "An account with this email already exists",
            ));
        }
        let record = UserRecord {
            id: self.next_id(),
            display_name: req.display_name.clone(),
            email: req.email.clone(),
            password_hash,
            role,
            avatar_url: None,
            registered_at: Utc::now(),
            member_since: None,
        };
        users.insert(record.id, record.clone());
        Ok(record)
    }

    pub fn user(&self, id: i64) -> Option<UserRecord> {
        read(&self.users).get(&id).cloned()
    }

    pub fn user_by_email(&self, email: &str) -> Option<UserRecord> {
        read(&self.users)
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned()
    }

    pub fn role_of(&self, id: i64) -> Option<Role> {
        read(&self.users).get(&id).map(|u| u.role)
    }

    pub fn set_role(&self, id: i64, role: Role) -> Result<(), AppError> {
        let mut users = write(&self.users);
        let user = users
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Account not found"))?;
        user.role = role;
        if role == Role::Member && user.member_since.is_none() {
            user.member_since = Some(Utc::now());
        }
        Ok(())
    }

    pub fn list_accounts(&self) -> Vec<AccountSummary> {
        let mut accounts: Vec<_> = read(&self.users).values().map(|u| u.summary()).collect();
        accounts.sort_by_key(|a| a.id);
        accounts
    }

    pub fn list_members(&self) -> Vec<AccountSummary> {
        let mut members: Vec<_> = read(&self.users)
            .values()
            .filter(|u| u.role == Role::Member)
            .map(|u| u.summary())
            .collect();
        members.sort_by_key(|a| a.id);
        members
    }

    /// Remove an account along with its bookings and refresh tokens.
    pub fn delete_account(&self, id: i64) -> Result<(), AppError> {
        let removed = write(&self.users).remove(&id);
        if removed.is_none() {
            return Err(AppError::not_found("Account not found"));
        }
        write(&self.bookings).retain(|_, b| b.user_id != id);
        write(&self.refresh_tokens).retain(|_, t| t.user_id != id);
        Ok(())
    }

    // ── Refresh tokens ──────────────────────────────────────────────────

    pub fn store_refresh_token(
        &self,
        token_hash: String,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) {
        write(&self.refresh_tokens).insert(
            token_hash,
            RefreshRecord {
                user_id,
                expires_at,
                revoked: false,
            },
        );
    }

    /// Look up an unrevoked, unexpired refresh token by hash.
    pub fn valid_refresh_token(&self, token_hash: &str) -> Option<RefreshRecord> {
        read(&self.refresh_tokens)
            .get(token_hash)
            .filter(|t| !t.revoked && t.expires_at > Utc::now())
            .cloned()
    }

    pub fn revoke_refresh_tokens(&self, user_id: i64) {
        for token in write(&self.refresh_tokens).values_mut() {
            if token.user_id == user_id {
                token.revoked = true;
            }
        }
    }

    // ── Courts ──────────────────────────────────────────────────────────

    pub fn list_courts(&self) -> Vec<Court> {
        let mut courts: Vec<_> = read(&self.courts).values().cloned().collect();
        courts.sort_by_key(|c| c.id);
        courts
    }

    pub fn court(&self, id: i64) -> Option<Court> {
        read(&self.courts).get(&id).cloned()
    }

    pub fn create_court(&self, input: &CourtInput) -> Court {
        let court = Court {
            id: self.next_id(),
            name: input.name.clone(),
            court_type: input.court_type.clone(),
            price_per_slot: input.price_per_slot,
            image_url: input.image_url.clone(),
            slots: input.slots.clone(),
        };
        write(&self.courts).insert(court.id, court.clone());
        court
    }

    pub fn update_court(&self, id: i64, input: &CourtInput) -> Result<Court, AppError> {
        let mut courts = write(&self.courts);
        let court = courts
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Court not found"))?;
        court.name = input.name.clone();
        court.court_type = input.court_type.clone();
        court.price_per_slot = input.price_per_slot;
        court.image_url = input.image_url.clone();
        court.slots = input.slots.clone();
        Ok(court.clone())
    }

    pub fn delete_court(&self, id: i64) -> Result<(), AppError> {
        write(&self.courts)
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Court not found"))
    }

    // ── Bookings ────────────────────────────────────────────────────────

    pub fn create_booking(
        &self,
        user: &UserRecord,
        req: &CreateBookingRequest,
    ) -> Result<Booking, AppError> {
        let court = self
            .court(req.court_id)
            .ok_or_else(|| AppError::not_found("Court not found"))?;
        for slot in &req.slots {
            if !court.slots.contains(slot) {
                return Err(AppError::bad_request(format!(
                    "Slot {slot:?} is not offered on {}",
                    court.name
                )));
            }
        }
        let booking = Booking {
            id: self.next_id(),
            user_id: user.id,
            user_email: user.email.clone(),
            court_id: court.id,
            court_name: court.name.clone(),
            date: req.date,
            slots: req.slots.clone(),
            price: court.price_per_slot * req.slots.len() as f64,
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        write(&self.bookings).insert(booking.id, booking.clone());
        Ok(booking)
    }

    pub fn booking(&self, id: i64) -> Option<Booking> {
        read(&self.bookings).get(&id).cloned()
    }

    /// A user's own bookings, optionally narrowed to one status.
    pub fn bookings_for(&self, user_id: i64, status: Option<BookingStatus>) -> Vec<Booking> {
        let mut bookings: Vec<_> = read(&self.bookings)
            .values()
            .filter(|b| b.user_id == user_id)
            .filter(|b| status.map(|s| b.status == s).unwrap_or(true))
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.id);
        bookings
    }

    /// All bookings in one status, for the admin screens.
    pub fn bookings_by_status(&self, status: BookingStatus) -> Vec<Booking> {
        let mut bookings: Vec<_> = read(&self.bookings)
            .values()
            .filter(|b| b.status == status)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.id);
        bookings
    }

    /// Approve a pending booking. The owner is promoted to member on their
    /// first approval — approval is what turns a user into a member.
    pub fn approve_booking(&self, id: i64) -> Result<Booking, AppError> {
        let booking = {
            let mut bookings = write(&self.bookings);
            let booking = bookings
                .get_mut(&id)
                .ok_or_else(|| AppError::not_found("Booking not found"))?;
            if booking.status != BookingStatus::Pending {
                return Err(AppError::conflict("Only pending bookings can be approved"));
            }
            booking.status = BookingStatus::Approved;
            booking.clone()
        };
        let mut users = write(&self.users);
        if let Some(owner) = users.get_mut(&booking.user_id) {
            if owner.role == Role::User {
                owner.role = Role::Member;
                owner.member_since = Some(Utc::now());
            }
        }
        Ok(booking)
    }

    /// Reject a pending booking by removing it.
    pub fn reject_booking(&self, id: i64) -> Result<(), AppError> {
        let mut bookings = write(&self.bookings);
        match bookings.get(&id) {
            Some(b) if b.status == BookingStatus::Pending => {
                bookings.remove(&id);
                Ok(())
            }
            Some(_) => Err(AppError::conflict("Only pending bookings can be rejected")),
            None => Err(AppError::not_found("Booking not found")),
        }
    }

    /// Cancel one's own booking. Confirmed (paid) bookings stay.
    pub fn cancel_booking(&self, user_id: i64, id: i64) -> Result<(), AppError> {
        let mut bookings = write(&self.bookings);
        match bookings.get(&id) {
            Some(b) if b.user_id != user_id => {
                Err(AppError::forbidden("This booking belongs to another account"))
            }
            Some(b) if b.status == BookingStatus::Confirmed => {
                Err(AppError::conflict("Confirmed bookings can no longer be cancelled"))
            }
            Some(_) => {
                bookings.remove(&id);
                Ok(())
            }
            None => Err(AppError::not_found("Booking not found")),
        }
    }

    // ── Payments ────────────────────────────────────────────────────────

    /// Pay for an approved booking, applying an optional coupon, and
    /// confirm it. Returns the recorded payment.
    pub fn pay_booking(
        &self,
        user_id: i64,
        req: &PayBookingRequest,
        today: NaiveDate,
    ) -> Result<Payment, AppError> {
        let coupon = match &req.coupon_code {
            Some(code) => {
                let coupon = self
                    .coupon_by_code(code)
                    .ok_or_else(|| AppError::bad_request("Unknown coupon code"))?;
                if !coupon.is_valid_on(today) {
                    return Err(AppError::bad_request("This coupon has expired"));
                }
                Some(coupon)
            }
            None => None,
        };

        let mut bookings = write(&self.bookings);
        let booking = bookings
            .get_mut(&req.booking_id)
            .ok_or_else(|| AppError::not_found("Booking not found"))?;
        if booking.user_id != user_id {
            return Err(AppError::forbidden("This booking belongs to another account"));
        }
        if booking.status != BookingStatus::Approved {
            return Err(AppError::conflict("Only approved bookings can be paid"));
        }

        let amount = match &coupon {
            Some(c) => c.apply(booking.price),
            None => booking.price,
        };
        booking.status = BookingStatus::Confirmed;

        let payment = Payment {
            id: Uuid::new_v4(),
            user_id,
            booking_id: booking.id,
            court_name: booking.court_name.clone(),
            date: booking.date,
            slots: booking.slots.clone(),
            amount,
            coupon_code: coupon.map(|c| c.code),
            paid_at: Utc::now(),
        };
        write(&self.payments).push(payment.clone());
        Ok(payment)
    }

    pub fn payments_for(&self, user_id: i64) -> Vec<Payment> {
        let mut payments: Vec<_> = read(&self.payments)
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        payments.sort_by_key(|p| p.paid_at);
        payments.reverse();
        payments
    }

    // ── Coupons ─────────────────────────────────────────────────────────

    pub fn list_coupons(&self) -> Vec<Coupon> {
        let mut coupons: Vec<_> = read(&self.coupons).values().cloned().collect();
        coupons.sort_by_key(|c| c.id);
        coupons
    }

    pub fn coupon_by_code(&self, code: &str) -> Option<Coupon> {
        read(&self.coupons)
            .values()
            .find(|c| c.code.eq_ignore_ascii_case(code))
            .cloned()
    }

    pub fn create_coupon(&self, input: &CouponInput) -> Result<Coupon, AppError> {
        let mut coupons = write(&self.coupons);
        if coupons
            .values()
            .any(|c| c.code.eq_ignore_ascii_case(&input.code))
        {
            return Err(AppError::conflict("A coupon with this code already exists"));
        }
        let coupon = Coupon {
            id: self.next_id(),
            code: input.code.clone(),
            discount_percent: input.discount_percent,
            description: input.description.clone(),
            expires_at: input.expires_at,
        };
        coupons.insert(coupon.id, coupon.clone());
        Ok(coupon)
    }

    pub fn update_coupon(&self, id: i64, input: &CouponInput) -> Result<Coupon, AppError> {
        let mut coupons = write(&self.coupons);
        if coupons
            .values()
            .any(|c| c.id != id && c.code.eq_ignore_ascii_case(&input.code))
        {
            return Err(AppError::conflict("A coupon with this code already exists"));
        }
        let coupon = coupons
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found("Coupon not found"))?;
        coupon.code = input.code.clone();
        coupon.discount_percent = input.discount_percent;
        coupon.description = input.description.clone();
        coupon.expires_at = input.expires_at;
        Ok(coupon.clone())
    }

    pub fn delete_coupon(&self, id: i64) -> Result<(), AppError> {
        write(&self.coupons)
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppError::not_found("Coupon not found"))
    }

    // ── Announcements ───────────────────────────────────────────────────

    pub fn list_announcements(&self) -> Vec<Announcement> {
        let mut announcements: Vec<_> = read(&self.announcements).values().cloned().collect();
        announcements.sort_by_key(|a| a.id);
        announcements.reverse();
        announcements
    }

    pub fn create_announcement(&self, input: &AnnouncementInput) -> Announcement {
        let announcement = Announcement {
            id: self.next_id(),
            title: input.title.clone(),
            body: input.body.clone(),
            created_at: Utc::now(),
        };
        write(&self.announcements).insert(announcement.id, announcement.clone());
        announcement
    }

    // ── Stats ───────────────────────────────────────────────────────────

    pub fn stats(&self) -> ClubStats {
        let users = read(&self.users);
        ClubStats {
            total_courts: read(&self.courts).len() as i64,
            total_users: users.len() as i64,
            total_members: users.values().filter(|u| u.role == Role::Member).count() as i64,
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

pub mod about;
pub mod all_courts;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod support;

use crate::auth::use_auth;
use crate::components::Loading;
use crate::role::{use_role, use_role_resolver};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBell, LdBriefcase, LdCalendar, LdClock, LdFileText, LdLayoutDashboard, LdPackage,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{
    evaluate_role, evaluate_session, AccessDecision, RoleState, SessionState, DASHBOARD_ROUTES,
};

use about::About;
use all_courts::AllCourts;
use contact::Contact;
use home::Home;
use login::Login;
use not_found::NotFound;
use signup::Signup;
use support::Support;

use dashboard::admin::make_announcement::MakeAnnouncement;
use dashboard::admin::manage_bookings::ManageBookings;
use dashboard::admin::manage_confirmed_bookings::ManageConfirmedBookings;
use dashboard::admin::manage_coupons::ManageCoupons;
use dashboard::admin::manage_courts::ManageCourts;
use dashboard::admin::manage_members::ManageMembers;
use dashboard::admin::manage_users::ManageUsers;
use dashboard::admin::profile::AdminProfile;
use dashboard::member::approved_bookings::ApprovedBookings;
use dashboard::member::confirmed_bookings::ConfirmedBookings;
use dashboard::member::payment::Payment;
use dashboard::member::payment_history::PaymentHistory;
use dashboard::member::profile::MemberProfile;
use dashboard::user::announcements::Announcements;
use dashboard::user::pending_bookings::PendingBookings;
use dashboard::user::profile::UserProfile;
use dashboard::Overview;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(PublicLayout)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/about")]
    About {},
    #[route("/all-courts")]
    AllCourts {},
    #[route("/contact")]
    Contact {},
    #[route("/support")]
    Support {},
    #[end_layout]
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[layout(RoleGate)]
    #[route("/dashboard")]
    Overview {},
    // User routes
    #[route("/dashboard/user-profile")]
    UserProfile {},
    #[route("/dashboard/pending-bookings")]
    PendingBookings {},
    #[route("/dashboard/announcements")]
    Announcements {},
    // Member routes
    #[route("/dashboard/member-profile")]
    MemberProfile {},
    #[route("/dashboard/approved-bookings")]
    ApprovedBookings {},
    #[route("/dashboard/confirmed-bookings")]
    ConfirmedBookings {},
    #[route("/dashboard/payment")]
    Payment {},
    #[route("/dashboard/payment-history")]
    PaymentHistory {},
    // Admin routes
    #[route("/dashboard/admin-profile")]
    AdminProfile {},
    #[route("/dashboard/manage-bookings")]
    ManageBookings {},
    #[route("/dashboard/manage-confirmed-bookings")]
    ManageConfirmedBookings {},
    #[route("/dashboard/manage-members")]
    ManageMembers {},
    #[route("/dashboard/manage-users")]
    ManageUsers {},
    #[route("/dashboard/manage-courts")]
    ManageCourts {},
    #[route("/dashboard/manage-coupons")]
    ManageCoupons {},
    #[route("/dashboard/make-announcement")]
    MakeAnnouncement {},
    #[end_layout]
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Key into the dashboard permission table, `None` for public routes.
    /// Kept as an exhaustive match so adding a dashboard route without an
    /// allow-list shows up immediately.
    pub fn dashboard_path(&self) -> Option<&'static str> {
        match self {
            Route::Overview {} => Some(""),
            Route::UserProfile {} => Some("user-profile"),
            Route::PendingBookings {} => Some("pending-bookings"),
            Route::Announcements {} => Some("announcements"),
            Route::MemberProfile {} => Some("member-profile"),
            Route::ApprovedBookings {} => Some("approved-bookings"),
            Route::ConfirmedBookings {} => Some("confirmed-bookings"),
            Route::Payment {} => Some("payment"),
            Route::PaymentHistory {} => Some("payment-history"),
            Route::AdminProfile {} => Some("admin-profile"),
            Route::ManageBookings {} => Some("manage-bookings"),
            Route::ManageConfirmedBookings {} => Some("manage-confirmed-bookings"),
            Route::ManageMembers {} => Some("manage-members"),
            Route::ManageUsers {} => Some("manage-users"),
            Route::ManageCourts {} => Some("manage-courts"),
            Route::ManageCoupons {} => Some("manage-coupons"),
            Route::MakeAnnouncement {} => Some("make-announcement"),
            Route::Home {}
            | Route::Login {}
            | Route::Signup {}
            | Route::About {}
            | Route::AllCourts {}
            | Route::Contact {}
            | Route::Support {}
            | Route::NotFound { .. } => None,
        }
    }
}

/// Auth guard layout — blocks the dashboard subtree until a session exists.
///
/// Uses `use_server_future` with `?` to propagate suspension properly.
/// During SSR the component suspends until the session check completes;
/// during hydration the embedded data is available immediately. The
/// snapshot is mirrored into the shared `AuthState` so the rest of the app
/// observes the same session the guard decided on.
#[component]
fn AuthGuard() -> Element {
    let mut auth = use_auth();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    let snapshot = match resource.read().as_ref() {
        None => SessionState::Loading,
        Some(Ok(Some(user))) => SessionState::Present(user.clone()),
        Some(Ok(None)) | Some(Err(_)) => SessionState::Absent,
    };

    if *auth.session.peek() != snapshot {
        auth.session.set(snapshot.clone());
    }

    match evaluate_session(&snapshot) {
        AccessDecision::Render => rsx! { Outlet::<Route> {} },
        AccessDecision::Pending => rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        },
        AccessDecision::RedirectTo(_) => {
            navigator().push(Route::Login {});
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
    }
}

/// Role gate layout — per-route guard between the dashboard shell and the
/// page. Looks the current route up in the permission table and maps the
/// decision onto render / placeholder / soft redirect to the dashboard
/// root. Evaluation is pure; re-running on every role or route change is
/// free of side effects.
#[component]
fn RoleGate() -> Element {
    let route: Route = use_route();
    let role = use_role();

    let allowed = route
        .dashboard_path()
        .and_then(|path| DASHBOARD_ROUTES.lookup(path));

    let Some(allowed) = allowed else {
        // A dashboard route missing from the table is a wiring bug;
        // fail closed onto the landing page rather than rendering.
        tracing::warn!(%route, "route missing from permission table");
        navigator().push(Route::Overview {});
        return rsx! { Loading {} };
    };

    match evaluate_role(&role, allowed) {
        AccessDecision::Render => rsx! { Outlet::<Route> {} },
        AccessDecision::Pending => rsx! { Loading {} },
        AccessDecision::RedirectTo(_) => {
            // Resolution failure and role mismatch take the same soft
            // redirect, but are logged apart (failures may hide backend
            // trouble behind what looks like a denial).
            if role == RoleState::Failed {
                tracing::warn!(%route, "role resolution failed; denying access");
            } else {
                tracing::debug!(%route, ?role, "role not allowed; redirecting to overview");
            }
            navigator().push(Route::Overview {});
            rsx! { Loading {} }
        }
    }
}

/// Public site layout: top navigation plus page content.
#[component]
fn PublicLayout() -> Element {
    let route: Route = use_route();
    let auth = use_auth();

    rsx! {
        div { class: "public-shell",
            nav { class: "public-nav",
                Link { to: Route::Home {}, class: "brand", "Courtside" }
                div { class: "public-nav-links",
                    Link { to: Route::AllCourts {}, class: if matches!(route, Route::AllCourts {}) { "active" } else { "" }, "Courts" }
                    Link { to: Route::About {}, class: if matches!(route, Route::About {}) { "active" } else { "" }, "About" }
                    Link { to: Route::Contact {}, class: if matches!(route, Route::Contact {}) { "active" } else { "" }, "Contact" }
                    Link { to: Route::Support {}, class: if matches!(route, Route::Support {}) { "active" } else { "" }, "Support" }
                }
                div { class: "public-nav-auth",
                    if auth.is_authenticated() {
                        Link { to: Route::Overview {}, class: "nav-cta", "Dashboard" }
                    } else {
                        Link { to: Route::Login {}, "Sign In" }
                        Link { to: Route::Signup {}, class: "nav-cta", "Join" }
                    }
                }
            }
            main { class: "public-content",
                Outlet::<Route> {}
            }
            footer { class: "public-footer",
                p { "Courtside Sports Club" }
            }
        }
    }
}

/// Dashboard shell: sidebar menu, top bar, page outlet. Hosts whichever
/// view the gates approve; carries no decision logic of its own beyond
/// reading the permission table for menu visibility.
#[component]
fn DashboardLayout() -> Element {
    // Keep the role in sync with the session for the whole subtree.
    use_role_resolver();

    let route: Route = use_route();
    let mut auth = use_auth();
    let role = use_role();

    let display_name = auth
        .current_user()
        .map(|u| u.display_name)
        .unwrap_or_default();

    let page_title = match &route {
        Route::Overview {} => "Overview",
        Route::UserProfile {} | Route::MemberProfile {} | Route::AdminProfile {} => "My Profile",
        Route::PendingBookings {} => "Pending Bookings",
        Route::Announcements {} => "Announcements",
        Route::ApprovedBookings {} => "Approved Bookings",
        Route::ConfirmedBookings {} => "Confirmed Bookings",
        Route::Payment {} => "Payment",
        Route::PaymentHistory {} => "Payment History",
        Route::ManageBookings {} => "Booking Approvals",
        Route::ManageConfirmedBookings {} => "Confirmed Bookings",
        Route::ManageMembers {} => "Manage Members",
        Route::ManageUsers {} => "Manage Users",
        Route::ManageCourts {} => "Manage Courts",
        Route::ManageCoupons {} => "Manage Coupons",
        Route::MakeAnnouncement {} => "Make Announcement",
        _ => "",
    };

    let sign_out = move |_| {
        spawn(async move {
            let _ = server::api::logout().await;
        });
        auth.clear_auth();
        navigator().push(Route::Home {});
    };

    // Menu items appear when the permission table admits the current role,
    // so the sidebar can never link somewhere the gate would bounce.
    let table = &*DASHBOARD_ROUTES;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("/assets/layout.css") }

        div { class: "dash-shell",
            aside { class: "dash-sidebar",
                div { class: "sidebar-brand",
                    span { class: "sidebar-brand-name", "Courtside" }
                }

                nav { class: "sidebar-menu",
                    div { class: "sidebar-group",
                        span { class: "sidebar-group-label", "Club" }
                        Link { to: Route::Overview {},
                            class: if matches!(route, Route::Overview {}) { "sidebar-item active" } else { "sidebar-item" },
                            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                            "Overview"
                        }
                        if table.allows("announcements", &role) {
                            Link { to: Route::Announcements {},
                                class: if matches!(route, Route::Announcements {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                "Announcements"
                            }
                        }
                        if table.allows("user-profile", &role) {
                            Link { to: Route::UserProfile {},
                                class: if matches!(route, Route::UserProfile {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                "My Profile"
                            }
                        }
                        if table.allows("member-profile", &role) {
                            Link { to: Route::MemberProfile {},
                                class: if matches!(route, Route::MemberProfile {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                "My Profile"
                            }
                        }
                        if table.allows("admin-profile", &role) {
                            Link { to: Route::AdminProfile {},
                                class: if matches!(route, Route::AdminProfile {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                "My Profile"
                            }
                        }
                    }

                    if table.allows("pending-bookings", &role) || table.allows("approved-bookings", &role) {
                        div { class: "sidebar-group",
                            span { class: "sidebar-group-label", "Bookings" }
                            if table.allows("pending-bookings", &role) {
                                Link { to: Route::PendingBookings {},
                                    class: if matches!(route, Route::PendingBookings {}) { "sidebar-item active" } else { "sidebar-item" },
                                    Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                                    "Pending Bookings"
                                }
                            }
                            if table.allows("approved-bookings", &role) {
                                Link { to: Route::ApprovedBookings {},
                                    class: if matches!(route, Route::ApprovedBookings {}) { "sidebar-item active" } else { "sidebar-item" },
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                    "Approved Bookings"
                                }
                            }
                            if table.allows("confirmed-bookings", &role) {
                                Link { to: Route::ConfirmedBookings {},
                                    class: if matches!(route, Route::ConfirmedBookings {}) { "sidebar-item active" } else { "sidebar-item" },
                                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                                    "Confirmed Bookings"
                                }
                            }
                            if table.allows("payment", &role) {
                                Link { to: Route::Payment {},
                                    class: if matches!(route, Route::Payment {}) { "sidebar-item active" } else { "sidebar-item" },
                                    "Payment"
                                }
                            }
                            if table.allows("payment-history", &role) {
                                Link { to: Route::PaymentHistory {},
                                    class: if matches!(route, Route::PaymentHistory {}) { "sidebar-item active" } else { "sidebar-item" },
                                    "Payment History"
                                }
                            }
                        }
                    }

                    if table.allows("manage-bookings", &role) {
                        div { class: "sidebar-group",
                            span { class: "sidebar-group-label", "Administration" }
                            Link { to: Route::ManageBookings {},
                                class: if matches!(route, Route::ManageBookings {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdClock> { icon: LdClock, width: 18, height: 18 }
                                "Booking Approvals"
                            }
                            Link { to: Route::ManageConfirmedBookings {},
                                class: if matches!(route, Route::ManageConfirmedBookings {}) { "sidebar-item active" } else { "sidebar-item" },
                                "Confirmed Bookings"
                            }
                            Link { to: Route::ManageMembers {},
                                class: if matches!(route, Route::ManageMembers {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "Members"
                            }
                            Link { to: Route::ManageUsers {},
                                class: if matches!(route, Route::ManageUsers {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                "All Users"
                            }
                            Link { to: Route::ManageCourts {},
                                class: if matches!(route, Route::ManageCourts {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                "Courts"
                            }
                            Link { to: Route::ManageCoupons {},
                                class: if matches!(route, Route::ManageCoupons {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdPackage> { icon: LdPackage, width: 18, height: 18 }
                                "Coupons"
                            }
                            Link { to: Route::MakeAnnouncement {},
                                class: if matches!(route, Route::MakeAnnouncement {}) { "sidebar-item active" } else { "sidebar-item" },
                                Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                                "Make Announcement"
                            }
                        }
                    }
                }
            }

            div { class: "dash-main",
                header { class: "dash-topbar",
                    span { class: "dash-title", "{page_title}" }
                    div { class: "dash-topbar-spacer" }
                    span { class: "dash-user", "{display_name}" }
                    button { class: "dash-signout", onclick: sign_out, "Sign Out" }
                }
                div { class: "dash-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

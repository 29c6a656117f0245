//! Indicator application state and logic.
//!
//! [`App`] holds the last status/settings snapshots, the server lists and
//! UI state. It re-queries the client on every poll event and after every
//! action; snapshots are replaced wholesale, never merged.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use nordtray::config::AppConfig;
use nordtray::constants;
use nordtray::state::{ConnectionState, SettingName, Settings, Status};
use nordtray::{CommandRunner, NordVpn, SystemRunner};
use ratatui::widgets::ListState;
use std::time::{Duration, Instant};

/// Which server list the sidebar shows.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ListKind {
    #[default]
    Countries,
    Groups,
    /// Cities of the country in [`App::city_country`].
    Cities,
}

impl ListKind {
    pub const fn title(self) -> &'static str {
        match self {
            Self::Countries => " Countries ",
            Self::Groups => " Groups ",
            Self::Cities => " Cities ",
        }
    }

    const fn toggled(self) -> Self {
        match self {
            Self::Countries => Self::Groups,
            Self::Groups | Self::Cities => Self::Countries,
        }
    }
}

/// Severity of a toast notification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

/// Toast notification for temporary messages.
#[derive(Clone, Debug)]
pub struct Toast {
    /// Message to display.
    pub message: String,
    pub toast_type: ToastType,
    /// When the toast should disappear.
    pub expires: Instant,
}

/// Main application state container.
pub struct App<R = SystemRunner> {
    /// Flag indicating the application should exit.
    pub should_quit: bool,

    // === Client State ===
    pub status: Status,
    pub settings: Settings,
    pub countries: Vec<String>,
    pub groups: Vec<String>,
    pub cities: Vec<String>,
    /// Country whose cities are loaded.
    pub city_country: Option<String>,

    // === UI State ===
    pub list_kind: ListKind,
    pub list_state: ListState,
    pub logs: Vec<String>,
    pub toast: Option<Toast>,
    pub show_help: bool,

    vpn: NordVpn<R>,
    toast_duration: Duration,
}

impl<R: CommandRunner> App<R> {
    /// Creates the app and takes the first snapshots.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be launched at all; there is
    /// nothing useful to show without it.
    pub fn new(vpn: NordVpn<R>, config: &AppConfig) -> nordtray::Result<Self> {
        let mut app = Self {
            should_quit: false,
            status: vpn.get_status()?,
            settings: vpn.get_settings()?,
            countries: vpn.get_countries()?,
            groups: vpn.get_groups()?,
            cities: Vec::new(),
            city_country: None,
            list_kind: ListKind::Countries,
            list_state: ListState::default(),
            logs: Vec::new(),
            toast: None,
            show_help: false,
            vpn,
            toast_duration: config.toast_duration(),
        };

        if !app.visible_names().is_empty() {
            app.list_state.select(Some(0));
        }

        app.log(&format!(
            "INIT: {} v{} starting...",
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        app.log(constants::MSG_BACKEND_INIT);
        app.log(&format!("STATUS: {}", app.status.state));
        for warning in app.status.warnings.clone() {
            app.log(&format!("WARN: {}", warning.message()));
        }
        app.log(constants::MSG_READY);

        Ok(app)
    }

    /// Names in the currently shown list.
    pub fn visible_names(&self) -> &[String] {
        match self.list_kind {
            ListKind::Countries => &self.countries,
            ListKind::Groups => &self.groups,
            ListKind::Cities => &self.cities,
        }
    }

    /// Sidebar title, naming the country while its cities are shown.
    pub fn list_title(&self) -> String {
        match (self.list_kind, &self.city_country) {
            (ListKind::Cities, Some(country)) => {
                format!(" Cities in {} ", country.replace('_', " "))
            }
            (kind, _) => kind.title().to_string(),
        }
    }

    fn selected_name(&self) -> Option<String> {
        self.list_state
            .selected()
            .and_then(|idx| self.visible_names().get(idx).cloned())
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            self.show_help = false;
            return;
        }

        if key.code == KeyCode::Char('q')
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Tab => self.toggle_list(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Enter => self.connect_selected(),
            KeyCode::Right | KeyCode::Char('l') => self.open_cities(),
            KeyCode::Left | KeyCode::Esc | KeyCode::Char('h') => self.close_cities(),
            KeyCode::Char('c') => self.quick_connect(),
            KeyCode::Char('d') => self.disconnect(),
            KeyCode::Char('r') => self.refresh_all(),
            KeyCode::Char('f') => self.toggle_setting(SettingName::Firewall),
            KeyCode::Char('K') => self.toggle_setting(SettingName::KillSwitch),
            KeyCode::Char('n') => self.toggle_setting(SettingName::Notify),
            KeyCode::Char('6') => self.toggle_setting(SettingName::Ipv6),
            _ => {}
        }
    }

    fn toggle_list(&mut self) {
        if self.list_kind == ListKind::Cities {
            self.close_cities();
            return;
        }
        self.show_list(self.list_kind.toggled(), 0);
    }

    fn show_list(&mut self, kind: ListKind, index: usize) {
        self.list_kind = kind;
        let len = self.visible_names().len();
        let select = if len == 0 { None } else { Some(index.min(len - 1)) };
        self.list_state.select(select);
    }

    /// Loads the cities of the highlighted country and shows them.
    fn open_cities(&mut self) {
        if self.list_kind != ListKind::Countries {
            return;
        }
        let Some(country) = self.selected_name() else {
            return;
        };

        let cities = self.vpn.get_cities(&country);
        let Some(cities) = self.check(cities) else {
            return;
        };
        if cities.is_empty() {
            self.show_toast(
                format!("No cities listed for {}", country.replace('_', " ")),
                ToastType::Info,
            );
            return;
        }

        self.cities = cities;
        self.city_country = Some(country);
        self.show_list(ListKind::Cities, 0);
    }

    /// Returns from the city list to the countries, keeping the country highlighted.
    fn close_cities(&mut self) {
        if self.list_kind != ListKind::Cities {
            return;
        }
        let index = self
            .city_country
            .as_ref()
            .and_then(|country| self.countries.iter().position(|c| c == country))
            .unwrap_or(0);
        self.show_list(ListKind::Countries, index);
    }

    fn select_next(&mut self) {
        let len = self.visible_names().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let len = self.visible_names().len();
        if len == 0 {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map_or(0, |i| if i == 0 { len - 1 } else { i - 1 });
        self.list_state.select(Some(prev));
    }

    /// Connects to the highlighted entry, dropping any current tunnel first.
    fn connect_selected(&mut self) {
        let Some(name) = self.selected_name() else {
            self.show_toast("Select a server location first".to_string(), ToastType::Warning);
            return;
        };

        self.log(&constants::MSG_CONNECTING.replace("{}", &name));
        if self.status.state != ConnectionState::Disconnected {
            let disconnected = self.vpn.disconnect();
            self.check(disconnected);
        }

        let result = match self.list_kind {
            ListKind::Countries => self.vpn.connect_to_country(&name),
            ListKind::Groups => self.vpn.connect_to_group(&name),
            ListKind::Cities => self.vpn.connect_to_city(&name),
        };
        self.finish_connect(result, &name);
    }

    fn quick_connect(&mut self) {
        self.log(&constants::MSG_CONNECTING.replace("{}", "fastest server"));
        if self.status.state != ConnectionState::Disconnected {
            let disconnected = self.vpn.disconnect();
            self.check(disconnected);
        }
        let result = self.vpn.connect();
        self.finish_connect(result, "fastest server");
    }

    fn finish_connect(&mut self, result: nordtray::Result<bool>, target: &str) {
        match self.check(result) {
            Some(true) => self.show_toast(format!("Connected to {target}"), ToastType::Success),
            Some(false) => self.show_toast(format!("Could not connect to {target}"), ToastType::Error),
            None => {}
        }
        self.refresh_status();
    }

    /// Drops the current tunnel.
    pub fn disconnect(&mut self) {
        let result = self.vpn.disconnect();
        match self.check(result) {
            Some(true) => self.show_toast("Disconnected".to_string(), ToastType::Info),
            Some(false) => self.show_toast("Disconnect failed".to_string(), ToastType::Error),
            None => {}
        }
        self.refresh_status();
    }

    /// Flips a boolean setting based on the last known value.
    fn toggle_setting(&mut self, setting: SettingName) {
        let enable = !self.settings.flag(setting).unwrap_or(false);
        let result = self.vpn.set_flag(setting, enable);
        let state = if enable { "enabled" } else { "disabled" };
        match self.check(result) {
            Some(true) => self.show_toast(format!("{setting} {state}"), ToastType::Success),
            Some(false) => self.show_toast(
                format!("{setting}: {}", constants::MSG_INVALID_COMMAND),
                ToastType::Error,
            ),
            None => {}
        }
        self.refresh_settings();
    }

    /// Re-queries everything: status, settings and the server lists.
    fn refresh_all(&mut self) {
        self.log(constants::MSG_FETCHING);
        self.refresh_status();
        self.refresh_settings();

        let countries = self.vpn.get_countries();
        if let Some(countries) = self.check(countries) {
            self.countries = countries;
        }
        let groups = self.vpn.get_groups();
        if let Some(groups) = self.check(groups) {
            self.groups = groups;
        }
        if let Some(country) = self.city_country.clone() {
            let cities = self.vpn.get_cities(&country);
            if let Some(cities) = self.check(cities) {
                self.cities = cities;
            }
        }

        let len = self.visible_names().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            Some(idx) if idx >= len => self.list_state.select(Some(len - 1)),
            None => self.list_state.select(Some(0)),
            Some(_) => {}
        }
        self.show_toast("Refreshed".to_string(), ToastType::Info);
    }

    fn refresh_status(&mut self) {
        let status = self.vpn.get_status();
        if let Some(status) = self.check(status) {
            if status.state != self.status.state {
                self.log(&format!("STATUS: {} -> {}", self.status.state, status.state));
            }
            self.status = status;
        }
    }

    fn refresh_settings(&mut self) {
        let settings = self.vpn.get_settings();
        if let Some(settings) = self.check(settings) {
            self.settings = settings;
        }
    }

    /// Unwraps a client result, surfacing launch failures in the UI.
    fn check<T>(&mut self, result: nordtray::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.show_toast(e.to_string(), ToastType::Error);
                None
            }
        }
    }

    /// Called on each status poll.
    pub fn on_poll(&mut self) {
        self.refresh_status();
    }

    /// Called on each tick.
    pub fn on_tick(&mut self) {
        if let Some(ref toast) = self.toast {
            if Instant::now() > toast.expires {
                self.toast = None;
            }
        }
    }

    /// Show a toast notification and log it
    fn show_toast(&mut self, message: String, toast_type: ToastType) {
        let level = match toast_type {
            ToastType::Info => "INFO",
            ToastType::Success => "SUCCESS",
            ToastType::Warning => "WARN",
            ToastType::Error => "ERROR",
        };
        self.log(&format!("{level}: {message}"));
        self.toast = Some(Toast {
            message,
            toast_type,
            expires: Instant::now() + self.toast_duration,
        });
    }

    /// Add a timestamped message to the activity log
    pub fn log(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format("%H:%M:%S");
        self.logs.push(format!("{timestamp} {message}"));

        if self.logs.len() > constants::MAX_LOG_LINES {
            self.logs.remove(0);
        }
    }
}

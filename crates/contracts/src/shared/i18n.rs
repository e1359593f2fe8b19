//! UI label translations.
//!
//! Every label the renderer shows is a [`TextKey`]. Each language table is an
//! exhaustive `match`, so a key without a translation does not compile.
//! Record, user and other data values never pass through here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
    Fr,
}

impl Language {
    pub fn all() -> [Language; 3] {
        [Language::En, Language::Es, Language::Fr]
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Fr => "fr",
        }
    }

    /// Name of the language in itself, for the language picker
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
            Language::Fr => "Français",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|l| l.code() == code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextKey {
    AppTitle,
    AppSubtitle,
    ClientLabel,
    ProjectManagerLabel,
    Navigation,
    NavDashboard,
    NavRecords,
    NavAddRecord,
    NavReports,
    NavAdmin,
    NavTraining,
    CurrentUser,
    QuickStats,
    Preferences,
    Theme,
    ThemeDark,
    ThemeLight,
    Language,
    FontSize,
    FontSmall,
    FontMedium,
    FontLarge,
    Logout,
    FooterVersion,
    FooterSupport,
    FooterPhone,
    LoginTitle,
    Username,
    Password,
    LoginButton,
    LoginHint,
    LoginFailed,
    Welcome,
    LoggedOut,
    NotLoggedIn,
    RecordSaved,
    ReadyForAnother,
    FormIncomplete,
    TitleRequired,
    CategoryRequired,
    SettingsSaved,
    SettingsNameRequired,
    SettingsPortRange,
    SettingsTimeoutRange,
    SettingsAttemptsRange,
    SettingsRetentionRange,
    ReportGenerated,
    BackupStarted,
    BackupCompleted,
    RestoreWarning,
    TicketSubmitted,
    TicketSubjectRequired,
    TotalRecords,
    PendingTasks,
    ThisMonth,
    SystemHealth,
    ActiveRecords,
    ActiveUsers,
    StorageUsed,
    SystemUptime,
    SecurityScore,
    FailedLogins,
    ActiveSessions,
    LastScan,
    CompletedModules,
    TimeSpent,
    CertificationProgress,
    AvgResponseTime,
    ResolutionRate,
    SatisfactionScore,
    OpenTickets,
    DashboardOverview,
    RecordsByCategory,
    ActivityTimeline,
    RecentActivity,
    ColAction,
    ColUser,
    ColTime,
    ColStatus,
    SearchRecords,
    SearchPlaceholder,
    Category,
    Status,
    AllOption,
    Refresh,
    AddNewRecord,
    ExportData,
    BulkActions,
    AdvancedFilter,
    AllRecords,
    RecordsFound,
    NoRecords,
    ColRecordId,
    ColRecordName,
    ColCategory,
    ColPriority,
    ColCreated,
    ColModified,
    ColAssigned,
    QuickActions,
    SelectRecord,
    ViewDetails,
    EditRecord,
    Duplicate,
    Delete,
    CreatingNewRecord,
    BasicInformation,
    RecordTitle,
    RecordTitlePlaceholder,
    RecordId,
    CategoryField,
    SelectCategory,
    PriorityLevel,
    Description,
    StartDate,
    EndDate,
    Tags,
    AccessPermissions,
    Visibility,
    VisPublic,
    VisRestricted,
    VisPrivate,
    AssignUsers,
    InitialStatus,
    Department,
    SaveRecord,
    SaveAndContinue,
    SaveAsDraft,
    Cancel,
    StatusDraft,
    StatusActive,
    StatusPendingReview,
    ReportType,
    TimePeriod,
    GenerateReport,
    QuickStatistics,
    MonthlyActivity,
    UserActivity,
    RecentReports,
    ColReportName,
    ColType,
    ColGenerated,
    ColSize,
    DownloadReport,
    EmailReport,
    ScheduleReport,
    RefreshData,
    AdminTitle,
    TabUsers,
    TabSettings,
    TabSecurity,
    TabBackup,
    Role,
    ColFullName,
    ColEmail,
    ColDepartment,
    ColLastLogin,
    AddNewUser,
    ExportUsers,
    GeneralSettings,
    CompanyName,
    SystemName,
    TimeZone,
    DefaultLanguage,
    EmailSettings,
    SmtpServer,
    SmtpPort,
    FromEmail,
    SecuritySettings,
    SessionTimeout,
    PasswordPolicy,
    TwoFactor,
    MaxLoginAttempts,
    DataSettings,
    BackupFrequency,
    RetentionDays,
    AutoArchive,
    SaveSettings,
    SecurityAuditLog,
    ColTimestamp,
    ColEvent,
    ColIp,
    ColRisk,
    RunSecurityScan,
    BackupManagement,
    LastBackup,
    BackupSchedule,
    RunBackupNow,
    RestoreOptions,
    SelectBackup,
    RestoreComponents,
    RestoreFromBackup,
    TrainingTitle,
    TabGuide,
    TabModules,
    TabQuickReference,
    TabFaq,
    TabSupport,
    GuideSection,
    TrainingProgress,
    AvailableModules,
    ColModule,
    ColDuration,
    ColScore,
    FaqCategory,
    SearchFaq,
    NoFaqMatches,
    SubmitTicket,
    IssueType,
    Priority,
    Subject,
    ContactInformation,
    EmailSupport,
    PhoneSupport,
    KnowledgeBase,
    SupportStatistics,
    RecentTickets,
    ColTicketId,
    ColSubject,
}

impl TextKey {
    /// Key by its variant name, e.g. `"NavDashboard"`
    pub fn from_name(name: &str) -> Option<Self> {
        serde_json::from_value(serde_json::Value::String(name.to_string())).ok()
    }
}

pub fn text(lang: Language, key: TextKey) -> &'static str {
    match lang {
        Language::En => en(key),
        Language::Es => es(key),
        Language::Fr => fr(key),
    }
}

/// String-keyed lookup; a name that is not a known key comes back unchanged
pub fn text_by_name(lang: Language, name: &str) -> String {
    match TextKey::from_name(name) {
        Some(key) => text(lang, key).to_string(),
        None => name.to_string(),
    }
}

/// Lookup bound to one language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    pub fn new(lang: Language) -> Self {
        Self { lang }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn t(&self, key: TextKey) -> String {
        text(self.lang, key).to_string()
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Corporate Information Management System (IMS)",
        TextKey::AppSubtitle => "System Development Project",
        TextKey::ClientLabel => "Client",
        TextKey::ProjectManagerLabel => "Project Manager",
        TextKey::Navigation => "Navigation",
        TextKey::NavDashboard => "Dashboard",
        TextKey::NavRecords => "Records Management",
        TextKey::NavAddRecord => "Add/Edit Record",
        TextKey::NavReports => "Reports & Analytics",
        TextKey::NavAdmin => "Admin & Settings",
        TextKey::NavTraining => "Training & Documentation",
        TextKey::CurrentUser => "Current User",
        TextKey::QuickStats => "Quick Stats",
        TextKey::Preferences => "Preferences",
        TextKey::Theme => "Theme",
        TextKey::ThemeDark => "Dark",
        TextKey::ThemeLight => "Light",
        TextKey::Language => "Language",
        TextKey::FontSize => "Font Size",
        TextKey::FontSmall => "Small",
        TextKey::FontMedium => "Medium",
        TextKey::FontLarge => "Large",
        TextKey::Logout => "Logout",
        TextKey::FooterVersion => "Version",
        TextKey::FooterSupport => "For technical support",
        TextKey::FooterPhone => "Phone",
        TextKey::LoginTitle => "Sign in",
        TextKey::Username => "Username",
        TextKey::Password => "Password",
        TextKey::LoginButton => "Login",
        TextKey::LoginHint => "Demo account: demo / demo",
        TextKey::LoginFailed => "Invalid username or password",
        TextKey::Welcome => "Welcome",
        TextKey::LoggedOut => "You have been logged out",
        TextKey::NotLoggedIn => "Please log in first",
        TextKey::RecordSaved => "Record saved successfully!",
        TextKey::ReadyForAnother => "Ready to add another record",
        TextKey::FormIncomplete => "Please fill in all required fields (marked with *)",
        TextKey::TitleRequired => "Record title is required",
        TextKey::CategoryRequired => "Please select a category",
        TextKey::SettingsSaved => "Settings saved successfully!",
        TextKey::SettingsNameRequired => "Company name and system name are required",
        TextKey::SettingsPortRange => "SMTP port must be between 1 and 65535",
        TextKey::SettingsTimeoutRange => "Session timeout must be between 5 and 480 minutes",
        TextKey::SettingsAttemptsRange => "Max login attempts must be between 1 and 10",
        TextKey::SettingsRetentionRange => "Data retention must be between 30 and 2555 days",
        TextKey::ReportGenerated => "Report generated",
        TextKey::BackupStarted => "Creating backup...",
        TextKey::BackupCompleted => "Backup completed successfully!",
        TextKey::RestoreWarning => "This action cannot be undone. Please confirm you want to proceed.",
        TextKey::TicketSubmitted => "Support ticket submitted successfully! Ticket",
        TextKey::TicketSubjectRequired => "Please enter a subject for your ticket",
        TextKey::TotalRecords => "Total Records",
        TextKey::PendingTasks => "Pending Tasks",
        TextKey::ThisMonth => "This Month",
        TextKey::SystemHealth => "System Health",
        TextKey::ActiveRecords => "Active Records",
        TextKey::ActiveUsers => "Active Users",
        TextKey::StorageUsed => "Storage Used",
        TextKey::SystemUptime => "System Uptime",
        TextKey::SecurityScore => "Security Score",
        TextKey::FailedLogins => "Failed Logins",
        TextKey::ActiveSessions => "Active Sessions",
        TextKey::LastScan => "Last Scan",
        TextKey::CompletedModules => "Completed Modules",
        TextKey::TimeSpent => "Time Spent",
        TextKey::CertificationProgress => "Certification Progress",
        TextKey::AvgResponseTime => "Avg Response Time",
        TextKey::ResolutionRate => "Resolution Rate",
        TextKey::SatisfactionScore => "Satisfaction Score",
        TextKey::OpenTickets => "Open Tickets",
        TextKey::DashboardOverview => "Dashboard Overview",
        TextKey::RecordsByCategory => "Records by Category",
        TextKey::ActivityTimeline => "Activity Timeline",
        TextKey::RecentActivity => "Recent Activity",
        TextKey::ColAction => "Action",
        TextKey::ColUser => "User",
        TextKey::ColTime => "Time",
        TextKey::ColStatus => "Status",
        TextKey::SearchRecords => "Search records...",
        TextKey::SearchPlaceholder => "Enter keywords to search",
        TextKey::Category => "Category",
        TextKey::Status => "Status",
        TextKey::AllOption => "All",
        TextKey::Refresh => "Refresh",
        TextKey::AddNewRecord => "Add New Record",
        TextKey::ExportData => "Export Data",
        TextKey::BulkActions => "Bulk Actions",
        TextKey::AdvancedFilter => "Advanced Filter",
        TextKey::AllRecords => "All Records",
        TextKey::RecordsFound => "records found",
        TextKey::NoRecords => "No records match the current filters",
        TextKey::ColRecordId => "Record ID",
        TextKey::ColRecordName => "Record Name",
        TextKey::ColCategory => "Category",
        TextKey::ColPriority => "Priority",
        TextKey::ColCreated => "Created",
        TextKey::ColModified => "Modified",
        TextKey::ColAssigned => "Assigned To",
        TextKey::QuickActions => "Quick Actions",
        TextKey::SelectRecord => "Select record for actions",
        TextKey::ViewDetails => "View Details",
        TextKey::EditRecord => "Edit Record",
        TextKey::Duplicate => "Duplicate",
        TextKey::Delete => "Delete",
        TextKey::CreatingNewRecord => "Creating New Record",
        TextKey::BasicInformation => "Basic Information",
        TextKey::RecordTitle => "Record Title *",
        TextKey::RecordTitlePlaceholder => "Enter record title...",
        TextKey::RecordId => "Record ID",
        TextKey::CategoryField => "Category *",
        TextKey::SelectCategory => "Select Category",
        TextKey::PriorityLevel => "Priority Level",
        TextKey::Description => "Description",
        TextKey::StartDate => "Start Date",
        TextKey::EndDate => "End Date",
        TextKey::Tags => "Tags",
        TextKey::AccessPermissions => "Access & Permissions",
        TextKey::Visibility => "Visibility",
        TextKey::VisPublic => "Public (All users can view)",
        TextKey::VisRestricted => "Restricted (Selected users only)",
        TextKey::VisPrivate => "Private (Only me)",
        TextKey::AssignUsers => "Assign to users",
        TextKey::InitialStatus => "Initial Status",
        TextKey::Department => "Department",
        TextKey::SaveRecord => "Save Record",
        TextKey::SaveAndContinue => "Save & Continue",
        TextKey::SaveAsDraft => "Save as Draft",
        TextKey::Cancel => "Cancel",
        TextKey::StatusDraft => "Draft",
        TextKey::StatusActive => "Active",
        TextKey::StatusPendingReview => "Pending Review",
        TextKey::ReportType => "Select Report Type",
        TextKey::TimePeriod => "Time Period",
        TextKey::GenerateReport => "Generate Report",
        TextKey::QuickStatistics => "Quick Statistics",
        TextKey::MonthlyActivity => "Monthly Activity Trend",
        TextKey::UserActivity => "User Activity Distribution",
        TextKey::RecentReports => "Recent Reports",
        TextKey::ColReportName => "Report Name",
        TextKey::ColType => "Type",
        TextKey::ColGenerated => "Generated",
        TextKey::ColSize => "Size",
        TextKey::DownloadReport => "Download Report",
        TextKey::EmailReport => "Email Report",
        TextKey::ScheduleReport => "Schedule Report",
        TextKey::RefreshData => "Refresh Data",
        TextKey::AdminTitle => "Administration & Settings",
        TextKey::TabUsers => "User Management",
        TextKey::TabSettings => "System Settings",
        TextKey::TabSecurity => "Security",
        TextKey::TabBackup => "Backup & Restore",
        TextKey::Role => "Role",
        TextKey::ColFullName => "Full Name",
        TextKey::ColEmail => "Email Address",
        TextKey::ColDepartment => "Department",
        TextKey::ColLastLogin => "Last Login",
        TextKey::AddNewUser => "Add New User",
        TextKey::ExportUsers => "Export Users",
        TextKey::GeneralSettings => "General Settings",
        TextKey::CompanyName => "Company Name",
        TextKey::SystemName => "System Name",
        TextKey::TimeZone => "Time Zone",
        TextKey::DefaultLanguage => "Default Language",
        TextKey::EmailSettings => "Email Settings",
        TextKey::SmtpServer => "SMTP Server",
        TextKey::SmtpPort => "SMTP Port",
        TextKey::FromEmail => "From Email",
        TextKey::SecuritySettings => "Security Settings",
        TextKey::SessionTimeout => "Session Timeout (minutes)",
        TextKey::PasswordPolicy => "Password Policy",
        TextKey::TwoFactor => "Enable Two-Factor Authentication",
        TextKey::MaxLoginAttempts => "Max Login Attempts",
        TextKey::DataSettings => "Data Settings",
        TextKey::BackupFrequency => "Backup Frequency",
        TextKey::RetentionDays => "Data Retention (days)",
        TextKey::AutoArchive => "Auto-archive old records",
        TextKey::SaveSettings => "Save Settings",
        TextKey::SecurityAuditLog => "Security Audit Log",
        TextKey::ColTimestamp => "Timestamp",
        TextKey::ColEvent => "Event",
        TextKey::ColIp => "IP",
        TextKey::ColRisk => "Risk",
        TextKey::RunSecurityScan => "Run Security Scan",
        TextKey::BackupManagement => "Backup Management",
        TextKey::LastBackup => "Last backup",
        TextKey::BackupSchedule => "Backup Schedule",
        TextKey::RunBackupNow => "Run Backup Now",
        TextKey::RestoreOptions => "Restore Options",
        TextKey::SelectBackup => "Select backup to restore",
        TextKey::RestoreComponents => "Restore components",
        TextKey::RestoreFromBackup => "Restore from Backup",
        TextKey::TrainingTitle => "Training & Documentation",
        TextKey::TabGuide => "User Guide",
        TextKey::TabModules => "Training Modules",
        TextKey::TabQuickReference => "Quick Reference",
        TextKey::TabFaq => "FAQ",
        TextKey::TabSupport => "Support",
        TextKey::GuideSection => "Select Guide Section",
        TextKey::TrainingProgress => "Your Training Progress",
        TextKey::AvailableModules => "Available Training Modules",
        TextKey::ColModule => "Module",
        TextKey::ColDuration => "Duration",
        TextKey::ColScore => "Score",
        TextKey::FaqCategory => "Select Category",
        TextKey::SearchFaq => "Search FAQ",
        TextKey::NoFaqMatches => "No FAQ entries match your search",
        TextKey::SubmitTicket => "Submit Support Ticket",
        TextKey::IssueType => "Issue Type",
        TextKey::Priority => "Priority",
        TextKey::Subject => "Subject",
        TextKey::ContactInformation => "Contact Information",
        TextKey::EmailSupport => "Email Support",
        TextKey::PhoneSupport => "Phone Support",
        TextKey::KnowledgeBase => "Knowledge Base",
        TextKey::SupportStatistics => "Support Statistics",
        TextKey::RecentTickets => "Your Recent Tickets",
        TextKey::ColTicketId => "Ticket ID",
        TextKey::ColSubject => "Subject",
    }
}

fn es(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Sistema Corporativo de Gestión de Información (IMS)",
        TextKey::AppSubtitle => "Proyecto de Desarrollo de Sistemas",
        TextKey::ClientLabel => "Cliente",
        TextKey::ProjectManagerLabel => "Director de Proyecto",
        TextKey::Navigation => "Navegación",
        TextKey::NavDashboard => "Panel",
        TextKey::NavRecords => "Gestión de Registros",
        TextKey::NavAddRecord => "Agregar/Editar Registro",
        TextKey::NavReports => "Informes y Análisis",
        TextKey::NavAdmin => "Administración y Configuración",
        TextKey::NavTraining => "Capacitación y Documentación",
        TextKey::CurrentUser => "Usuario Actual",
        TextKey::QuickStats => "Estadísticas Rápidas",
        TextKey::Preferences => "Preferencias",
        TextKey::Theme => "Tema",
        TextKey::ThemeDark => "Oscuro",
        TextKey::ThemeLight => "Claro",
        TextKey::Language => "Idioma",
        TextKey::FontSize => "Tamaño de Fuente",
        TextKey::FontSmall => "Pequeño",
        TextKey::FontMedium => "Mediano",
        TextKey::FontLarge => "Grande",
        TextKey::Logout => "Cerrar Sesión",
        TextKey::FooterVersion => "Versión",
        TextKey::FooterSupport => "Para soporte técnico",
        TextKey::FooterPhone => "Teléfono",
        TextKey::LoginTitle => "Iniciar sesión",
        TextKey::Username => "Usuario",
        TextKey::Password => "Contraseña",
        TextKey::LoginButton => "Entrar",
        TextKey::LoginHint => "Cuenta de prueba: demo / demo",
        TextKey::LoginFailed => "Usuario o contraseña no válidos",
        TextKey::Welcome => "Bienvenido",
        TextKey::LoggedOut => "Ha cerrado la sesión",
        TextKey::NotLoggedIn => "Inicie sesión primero",
        TextKey::RecordSaved => "¡Registro guardado correctamente!",
        TextKey::ReadyForAnother => "Listo para agregar otro registro",
        TextKey::FormIncomplete => "Complete todos los campos obligatorios (marcados con *)",
        TextKey::TitleRequired => "El título del registro es obligatorio",
        TextKey::CategoryRequired => "Seleccione una categoría",
        TextKey::SettingsSaved => "¡Configuración guardada correctamente!",
        TextKey::SettingsNameRequired => "El nombre de la empresa y del sistema son obligatorios",
        TextKey::SettingsPortRange => "El puerto SMTP debe estar entre 1 y 65535",
        TextKey::SettingsTimeoutRange => "El tiempo de sesión debe estar entre 5 y 480 minutos",
        TextKey::SettingsAttemptsRange => "Los intentos máximos deben estar entre 1 y 10",
        TextKey::SettingsRetentionRange => "La retención debe estar entre 30 y 2555 días",
        TextKey::ReportGenerated => "Informe generado",
        TextKey::BackupStarted => "Creando copia de seguridad...",
        TextKey::BackupCompleted => "¡Copia de seguridad completada!",
        TextKey::RestoreWarning => "Esta acción no se puede deshacer. Confirme que desea continuar.",
        TextKey::TicketSubmitted => "¡Ticket de soporte enviado! Ticket",
        TextKey::TicketSubjectRequired => "Introduzca un asunto para su ticket",
        TextKey::TotalRecords => "Registros Totales",
        TextKey::PendingTasks => "Tareas Pendientes",
        TextKey::ThisMonth => "Este Mes",
        TextKey::SystemHealth => "Estado del Sistema",
        TextKey::ActiveRecords => "Registros Activos",
        TextKey::ActiveUsers => "Usuarios Activos",
        TextKey::StorageUsed => "Almacenamiento Usado",
        TextKey::SystemUptime => "Disponibilidad",
        TextKey::SecurityScore => "Puntuación de Seguridad",
        TextKey::FailedLogins => "Inicios Fallidos",
        TextKey::ActiveSessions => "Sesiones Activas",
        TextKey::LastScan => "Último Análisis",
        TextKey::CompletedModules => "Módulos Completados",
        TextKey::TimeSpent => "Tiempo Dedicado",
        TextKey::CertificationProgress => "Progreso de Certificación",
        TextKey::AvgResponseTime => "Tiempo Medio de Respuesta",
        TextKey::ResolutionRate => "Tasa de Resolución",
        TextKey::SatisfactionScore => "Satisfacción",
        TextKey::OpenTickets => "Tickets Abiertos",
        TextKey::DashboardOverview => "Resumen del Panel",
        TextKey::RecordsByCategory => "Registros por Categoría",
        TextKey::ActivityTimeline => "Cronología de Actividad",
        TextKey::RecentActivity => "Actividad Reciente",
        TextKey::ColAction => "Acción",
        TextKey::ColUser => "Usuario",
        TextKey::ColTime => "Hora",
        TextKey::ColStatus => "Estado",
        TextKey::SearchRecords => "Buscar registros...",
        TextKey::SearchPlaceholder => "Introduzca palabras clave",
        TextKey::Category => "Categoría",
        TextKey::Status => "Estado",
        TextKey::AllOption => "Todos",
        TextKey::Refresh => "Actualizar",
        TextKey::AddNewRecord => "Nuevo Registro",
        TextKey::ExportData => "Exportar Datos",
        TextKey::BulkActions => "Acciones Masivas",
        TextKey::AdvancedFilter => "Filtro Avanzado",
        TextKey::AllRecords => "Todos los Registros",
        TextKey::RecordsFound => "registros encontrados",
        TextKey::NoRecords => "Ningún registro coincide con los filtros",
        TextKey::ColRecordId => "ID de Registro",
        TextKey::ColRecordName => "Nombre del Registro",
        TextKey::ColCategory => "Categoría",
        TextKey::ColPriority => "Prioridad",
        TextKey::ColCreated => "Creado",
        TextKey::ColModified => "Modificado",
        TextKey::ColAssigned => "Asignado a",
        TextKey::QuickActions => "Acciones Rápidas",
        TextKey::SelectRecord => "Seleccione un registro",
        TextKey::ViewDetails => "Ver Detalles",
        TextKey::EditRecord => "Editar Registro",
        TextKey::Duplicate => "Duplicar",
        TextKey::Delete => "Eliminar",
        TextKey::CreatingNewRecord => "Creando Nuevo Registro",
        TextKey::BasicInformation => "Información Básica",
        TextKey::RecordTitle => "Título del Registro *",
        TextKey::RecordTitlePlaceholder => "Introduzca el título...",
        TextKey::RecordId => "ID de Registro",
        TextKey::CategoryField => "Categoría *",
        TextKey::SelectCategory => "Seleccione Categoría",
        TextKey::PriorityLevel => "Nivel de Prioridad",
        TextKey::Description => "Descripción",
        TextKey::StartDate => "Fecha de Inicio",
        TextKey::EndDate => "Fecha de Fin",
        TextKey::Tags => "Etiquetas",
        TextKey::AccessPermissions => "Acceso y Permisos",
        TextKey::Visibility => "Visibilidad",
        TextKey::VisPublic => "Público (todos pueden ver)",
        TextKey::VisRestricted => "Restringido (usuarios seleccionados)",
        TextKey::VisPrivate => "Privado (solo yo)",
        TextKey::AssignUsers => "Asignar a usuarios",
        TextKey::InitialStatus => "Estado Inicial",
        TextKey::Department => "Departamento",
        TextKey::SaveRecord => "Guardar Registro",
        TextKey::SaveAndContinue => "Guardar y Continuar",
        TextKey::SaveAsDraft => "Guardar como Borrador",
        TextKey::Cancel => "Cancelar",
        TextKey::StatusDraft => "Borrador",
        TextKey::StatusActive => "Activo",
        TextKey::StatusPendingReview => "Pendiente de Revisión",
        TextKey::ReportType => "Tipo de Informe",
        TextKey::TimePeriod => "Período",
        TextKey::GenerateReport => "Generar Informe",
        TextKey::QuickStatistics => "Estadísticas Rápidas",
        TextKey::MonthlyActivity => "Tendencia de Actividad Mensual",
        TextKey::UserActivity => "Distribución de Actividad",
        TextKey::RecentReports => "Informes Recientes",
        TextKey::ColReportName => "Nombre del Informe",
        TextKey::ColType => "Tipo",
        TextKey::ColGenerated => "Generado",
        TextKey::ColSize => "Tamaño",
        TextKey::DownloadReport => "Descargar Informe",
        TextKey::EmailReport => "Enviar por Correo",
        TextKey::ScheduleReport => "Programar Informe",
        TextKey::RefreshData => "Actualizar Datos",
        TextKey::AdminTitle => "Administración y Configuración",
        TextKey::TabUsers => "Gestión de Usuarios",
        TextKey::TabSettings => "Configuración del Sistema",
        TextKey::TabSecurity => "Seguridad",
        TextKey::TabBackup => "Copia y Restauración",
        TextKey::Role => "Rol",
        TextKey::ColFullName => "Nombre Completo",
        TextKey::ColEmail => "Correo Electrónico",
        TextKey::ColDepartment => "Departamento",
        TextKey::ColLastLogin => "Último Acceso",
        TextKey::AddNewUser => "Nuevo Usuario",
        TextKey::ExportUsers => "Exportar Usuarios",
        TextKey::GeneralSettings => "Configuración General",
        TextKey::CompanyName => "Nombre de la Empresa",
        TextKey::SystemName => "Nombre del Sistema",
        TextKey::TimeZone => "Zona Horaria",
        TextKey::DefaultLanguage => "Idioma Predeterminado",
        TextKey::EmailSettings => "Configuración de Correo",
        TextKey::SmtpServer => "Servidor SMTP",
        TextKey::SmtpPort => "Puerto SMTP",
        TextKey::FromEmail => "Correo Remitente",
        TextKey::SecuritySettings => "Configuración de Seguridad",
        TextKey::SessionTimeout => "Tiempo de Sesión (minutos)",
        TextKey::PasswordPolicy => "Política de Contraseñas",
        TextKey::TwoFactor => "Activar Autenticación de Dos Factores",
        TextKey::MaxLoginAttempts => "Intentos Máximos de Acceso",
        TextKey::DataSettings => "Configuración de Datos",
        TextKey::BackupFrequency => "Frecuencia de Copia",
        TextKey::RetentionDays => "Retención de Datos (días)",
        TextKey::AutoArchive => "Archivar registros antiguos",
        TextKey::SaveSettings => "Guardar Configuración",
        TextKey::SecurityAuditLog => "Registro de Auditoría",
        TextKey::ColTimestamp => "Fecha y Hora",
        TextKey::ColEvent => "Evento",
        TextKey::ColIp => "IP",
        TextKey::ColRisk => "Riesgo",
        TextKey::RunSecurityScan => "Ejecutar Análisis",
        TextKey::BackupManagement => "Gestión de Copias",
        TextKey::LastBackup => "Última copia",
        TextKey::BackupSchedule => "Programación de Copias",
        TextKey::RunBackupNow => "Ejecutar Copia Ahora",
        TextKey::RestoreOptions => "Opciones de Restauración",
        TextKey::SelectBackup => "Seleccione la copia a restaurar",
        TextKey::RestoreComponents => "Componentes a restaurar",
        TextKey::RestoreFromBackup => "Restaurar desde Copia",
        TextKey::TrainingTitle => "Capacitación y Documentación",
        TextKey::TabGuide => "Guía del Usuario",
        TextKey::TabModules => "Módulos de Capacitación",
        TextKey::TabQuickReference => "Referencia Rápida",
        TextKey::TabFaq => "Preguntas Frecuentes",
        TextKey::TabSupport => "Soporte",
        TextKey::GuideSection => "Sección de la Guía",
        TextKey::TrainingProgress => "Su Progreso",
        TextKey::AvailableModules => "Módulos Disponibles",
        TextKey::ColModule => "Módulo",
        TextKey::ColDuration => "Duración",
        TextKey::ColScore => "Puntuación",
        TextKey::FaqCategory => "Seleccione Categoría",
        TextKey::SearchFaq => "Buscar en Preguntas",
        TextKey::NoFaqMatches => "Ninguna pregunta coincide",
        TextKey::SubmitTicket => "Enviar Ticket de Soporte",
        TextKey::IssueType => "Tipo de Problema",
        TextKey::Priority => "Prioridad",
        TextKey::Subject => "Asunto",
        TextKey::ContactInformation => "Información de Contacto",
        TextKey::EmailSupport => "Soporte por Correo",
        TextKey::PhoneSupport => "Soporte Telefónico",
        TextKey::KnowledgeBase => "Base de Conocimiento",
        TextKey::SupportStatistics => "Estadísticas de Soporte",
        TextKey::RecentTickets => "Sus Tickets Recientes",
        TextKey::ColTicketId => "ID de Ticket",
        TextKey::ColSubject => "Asunto",
    }
}

fn fr(key: TextKey) -> &'static str {
    match key {
        TextKey::AppTitle => "Système d'Information de Gestion d'Entreprise (IMS)",
        TextKey::AppSubtitle => "Projet de Développement Système",
        TextKey::ClientLabel => "Client",
        TextKey::ProjectManagerLabel => "Chef de Projet",
        TextKey::Navigation => "Navigation",
        TextKey::NavDashboard => "Tableau de bord",
        TextKey::NavRecords => "Gestion des Enregistrements",
        TextKey::NavAddRecord => "Ajouter/Modifier un Enregistrement",
        TextKey::NavReports => "Rapports et Analyses",
        TextKey::NavAdmin => "Administration et Paramètres",
        TextKey::NavTraining => "Formation et Documentation",
        TextKey::CurrentUser => "Utilisateur Actuel",
        TextKey::QuickStats => "Statistiques Rapides",
        TextKey::Preferences => "Préférences",
        TextKey::Theme => "Thème",
        TextKey::ThemeDark => "Sombre",
        TextKey::ThemeLight => "Clair",
        TextKey::Language => "Langue",
        TextKey::FontSize => "Taille de Police",
        TextKey::FontSmall => "Petite",
        TextKey::FontMedium => "Moyenne",
        TextKey::FontLarge => "Grande",
        TextKey::Logout => "Déconnexion",
        TextKey::FooterVersion => "Version",
        TextKey::FooterSupport => "Pour le support technique",
        TextKey::FooterPhone => "Téléphone",
        TextKey::LoginTitle => "Connexion",
        TextKey::Username => "Nom d'utilisateur",
        TextKey::Password => "Mot de passe",
        TextKey::LoginButton => "Se connecter",
        TextKey::LoginHint => "Compte de démonstration : demo / demo",
        TextKey::LoginFailed => "Nom d'utilisateur ou mot de passe invalide",
        TextKey::Welcome => "Bienvenue",
        TextKey::LoggedOut => "Vous êtes déconnecté",
        TextKey::NotLoggedIn => "Veuillez d'abord vous connecter",
        TextKey::RecordSaved => "Enregistrement sauvegardé avec succès !",
        TextKey::ReadyForAnother => "Prêt à ajouter un autre enregistrement",
        TextKey::FormIncomplete => "Veuillez remplir tous les champs obligatoires (marqués d'un *)",
        TextKey::TitleRequired => "Le titre de l'enregistrement est obligatoire",
        TextKey::CategoryRequired => "Veuillez sélectionner une catégorie",
        TextKey::SettingsSaved => "Paramètres enregistrés avec succès !",
        TextKey::SettingsNameRequired => "Le nom de l'entreprise et du système sont obligatoires",
        TextKey::SettingsPortRange => "Le port SMTP doit être compris entre 1 et 65535",
        TextKey::SettingsTimeoutRange => "Le délai de session doit être compris entre 5 et 480 minutes",
        TextKey::SettingsAttemptsRange => "Le nombre de tentatives doit être compris entre 1 et 10",
        TextKey::SettingsRetentionRange => "La conservation doit être comprise entre 30 et 2555 jours",
        TextKey::ReportGenerated => "Rapport généré",
        TextKey::BackupStarted => "Création de la sauvegarde...",
        TextKey::BackupCompleted => "Sauvegarde terminée avec succès !",
        TextKey::RestoreWarning => "Cette action est irréversible. Veuillez confirmer pour continuer.",
        TextKey::TicketSubmitted => "Ticket de support envoyé ! Ticket",
        TextKey::TicketSubjectRequired => "Veuillez saisir un objet pour votre ticket",
        TextKey::TotalRecords => "Total des Enregistrements",
        TextKey::PendingTasks => "Tâches en Attente",
        TextKey::ThisMonth => "Ce Mois-ci",
        TextKey::SystemHealth => "Santé du Système",
        TextKey::ActiveRecords => "Enregistrements Actifs",
        TextKey::ActiveUsers => "Utilisateurs Actifs",
        TextKey::StorageUsed => "Stockage Utilisé",
        TextKey::SystemUptime => "Disponibilité",
        TextKey::SecurityScore => "Score de Sécurité",
        TextKey::FailedLogins => "Connexions Échouées",
        TextKey::ActiveSessions => "Sessions Actives",
        TextKey::LastScan => "Dernière Analyse",
        TextKey::CompletedModules => "Modules Terminés",
        TextKey::TimeSpent => "Temps Passé",
        TextKey::CertificationProgress => "Progression de la Certification",
        TextKey::AvgResponseTime => "Temps de Réponse Moyen",
        TextKey::ResolutionRate => "Taux de Résolution",
        TextKey::SatisfactionScore => "Satisfaction",
        TextKey::OpenTickets => "Tickets Ouverts",
        TextKey::DashboardOverview => "Vue d'ensemble",
        TextKey::RecordsByCategory => "Enregistrements par Catégorie",
        TextKey::ActivityTimeline => "Chronologie d'Activité",
        TextKey::RecentActivity => "Activité Récente",
        TextKey::ColAction => "Action",
        TextKey::ColUser => "Utilisateur",
        TextKey::ColTime => "Heure",
        TextKey::ColStatus => "Statut",
        TextKey::SearchRecords => "Rechercher des enregistrements...",
        TextKey::SearchPlaceholder => "Saisissez des mots-clés",
        TextKey::Category => "Catégorie",
        TextKey::Status => "Statut",
        TextKey::AllOption => "Tous",
        TextKey::Refresh => "Actualiser",
        TextKey::AddNewRecord => "Nouvel Enregistrement",
        TextKey::ExportData => "Exporter",
        TextKey::BulkActions => "Actions Groupées",
        TextKey::AdvancedFilter => "Filtre Avancé",
        TextKey::AllRecords => "Tous les Enregistrements",
        TextKey::RecordsFound => "enregistrements trouvés",
        TextKey::NoRecords => "Aucun enregistrement ne correspond aux filtres",
        TextKey::ColRecordId => "ID",
        TextKey::ColRecordName => "Nom",
        TextKey::ColCategory => "Catégorie",
        TextKey::ColPriority => "Priorité",
        TextKey::ColCreated => "Créé",
        TextKey::ColModified => "Modifié",
        TextKey::ColAssigned => "Assigné à",
        TextKey::QuickActions => "Actions Rapides",
        TextKey::SelectRecord => "Sélectionnez un enregistrement",
        TextKey::ViewDetails => "Voir les Détails",
        TextKey::EditRecord => "Modifier",
        TextKey::Duplicate => "Dupliquer",
        TextKey::Delete => "Supprimer",
        TextKey::CreatingNewRecord => "Création d'un Nouvel Enregistrement",
        TextKey::BasicInformation => "Informations de Base",
        TextKey::RecordTitle => "Titre de l'Enregistrement *",
        TextKey::RecordTitlePlaceholder => "Saisissez le titre...",
        TextKey::RecordId => "ID de l'Enregistrement",
        TextKey::CategoryField => "Catégorie *",
        TextKey::SelectCategory => "Sélectionnez une Catégorie",
        TextKey::PriorityLevel => "Niveau de Priorité",
        TextKey::Description => "Description",
        TextKey::StartDate => "Date de Début",
        TextKey::EndDate => "Date de Fin",
        TextKey::Tags => "Étiquettes",
        TextKey::AccessPermissions => "Accès et Permissions",
        TextKey::Visibility => "Visibilité",
        TextKey::VisPublic => "Public (tous les utilisateurs)",
        TextKey::VisRestricted => "Restreint (utilisateurs choisis)",
        TextKey::VisPrivate => "Privé (moi uniquement)",
        TextKey::AssignUsers => "Assigner aux utilisateurs",
        TextKey::InitialStatus => "Statut Initial",
        TextKey::Department => "Département",
        TextKey::SaveRecord => "Enregistrer",
        TextKey::SaveAndContinue => "Enregistrer et Continuer",
        TextKey::SaveAsDraft => "Enregistrer comme Brouillon",
        TextKey::Cancel => "Annuler",
        TextKey::StatusDraft => "Brouillon",
        TextKey::StatusActive => "Actif",
        TextKey::StatusPendingReview => "En Attente de Révision",
        TextKey::ReportType => "Type de Rapport",
        TextKey::TimePeriod => "Période",
        TextKey::GenerateReport => "Générer le Rapport",
        TextKey::QuickStatistics => "Statistiques Rapides",
        TextKey::MonthlyActivity => "Tendance d'Activité Mensuelle",
        TextKey::UserActivity => "Répartition de l'Activité",
        TextKey::RecentReports => "Rapports Récents",
        TextKey::ColReportName => "Nom du Rapport",
        TextKey::ColType => "Type",
        TextKey::ColGenerated => "Généré",
        TextKey::ColSize => "Taille",
        TextKey::DownloadReport => "Télécharger",
        TextKey::EmailReport => "Envoyer par E-mail",
        TextKey::ScheduleReport => "Planifier",
        TextKey::RefreshData => "Actualiser les Données",
        TextKey::AdminTitle => "Administration et Paramètres",
        TextKey::TabUsers => "Gestion des Utilisateurs",
        TextKey::TabSettings => "Paramètres Système",
        TextKey::TabSecurity => "Sécurité",
        TextKey::TabBackup => "Sauvegarde et Restauration",
        TextKey::Role => "Rôle",
        TextKey::ColFullName => "Nom Complet",
        TextKey::ColEmail => "Adresse E-mail",
        TextKey::ColDepartment => "Département",
        TextKey::ColLastLogin => "Dernière Connexion",
        TextKey::AddNewUser => "Nouvel Utilisateur",
        TextKey::ExportUsers => "Exporter les Utilisateurs",
        TextKey::GeneralSettings => "Paramètres Généraux",
        TextKey::CompanyName => "Nom de l'Entreprise",
        TextKey::SystemName => "Nom du Système",
        TextKey::TimeZone => "Fuseau Horaire",
        TextKey::DefaultLanguage => "Langue par Défaut",
        TextKey::EmailSettings => "Paramètres E-mail",
        TextKey::SmtpServer => "Serveur SMTP",
        TextKey::SmtpPort => "Port SMTP",
        TextKey::FromEmail => "E-mail d'Expédition",
        TextKey::SecuritySettings => "Paramètres de Sécurité",
        TextKey::SessionTimeout => "Délai de Session (minutes)",
        TextKey::PasswordPolicy => "Politique de Mot de Passe",
        TextKey::TwoFactor => "Activer l'Authentification à Deux Facteurs",
        TextKey::MaxLoginAttempts => "Tentatives de Connexion Max",
        TextKey::DataSettings => "Paramètres des Données",
        TextKey::BackupFrequency => "Fréquence de Sauvegarde",
        TextKey::RetentionDays => "Conservation des Données (jours)",
        TextKey::AutoArchive => "Archiver automatiquement",
        TextKey::SaveSettings => "Enregistrer les Paramètres",
        TextKey::SecurityAuditLog => "Journal d'Audit",
        TextKey::ColTimestamp => "Horodatage",
        TextKey::ColEvent => "Événement",
        TextKey::ColIp => "IP",
        TextKey::ColRisk => "Risque",
        TextKey::RunSecurityScan => "Lancer une Analyse",
        TextKey::BackupManagement => "Gestion des Sauvegardes",
        TextKey::LastBackup => "Dernière sauvegarde",
        TextKey::BackupSchedule => "Planification",
        TextKey::RunBackupNow => "Sauvegarder Maintenant",
        TextKey::RestoreOptions => "Options de Restauration",
        TextKey::SelectBackup => "Sélectionnez la sauvegarde",
        TextKey::RestoreComponents => "Composants à restaurer",
        TextKey::RestoreFromBackup => "Restaurer",
        TextKey::TrainingTitle => "Formation et Documentation",
        TextKey::TabGuide => "Guide Utilisateur",
        TextKey::TabModules => "Modules de Formation",
        TextKey::TabQuickReference => "Référence Rapide",
        TextKey::TabFaq => "FAQ",
        TextKey::TabSupport => "Support",
        TextKey::GuideSection => "Section du Guide",
        TextKey::TrainingProgress => "Votre Progression",
        TextKey::AvailableModules => "Modules Disponibles",
        TextKey::ColModule => "Module",
        TextKey::ColDuration => "Durée",
        TextKey::ColScore => "Score",
        TextKey::FaqCategory => "Sélectionnez une Catégorie",
        TextKey::SearchFaq => "Rechercher dans la FAQ",
        TextKey::NoFaqMatches => "Aucune entrée ne correspond",
        TextKey::SubmitTicket => "Envoyer un Ticket",
        TextKey::IssueType => "Type de Problème",
        TextKey::Priority => "Priorité",
        TextKey::Subject => "Objet",
        TextKey::ContactInformation => "Coordonnées",
        TextKey::EmailSupport => "Support par E-mail",
        TextKey::PhoneSupport => "Support Téléphonique",
        TextKey::KnowledgeBase => "Base de Connaissances",
        TextKey::SupportStatistics => "Statistiques du Support",
        TextKey::RecentTickets => "Vos Tickets Récents",
        TextKey::ColTicketId => "N° de Ticket",
        TextKey::ColSubject => "Objet",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_per_language() {
        assert_eq!(text(Language::En, TextKey::NavDashboard), "Dashboard");
        assert_eq!(text(Language::Es, TextKey::NavDashboard), "Panel");
        assert_eq!(text(Language::Fr, TextKey::Logout), "Déconnexion");
    }

    #[test]
    fn test_text_by_name_falls_back_to_key() {
        assert_eq!(text_by_name(Language::Es, "SaveRecord"), "Guardar Registro");
        assert_eq!(text_by_name(Language::Fr, "no_such_label"), "no_such_label");
        assert_eq!(text_by_name(Language::En, ""), "");
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("de"), None);
        assert_eq!(serde_json::to_string(&Language::Fr).unwrap(), "\"fr\"");
    }

    #[test]
    fn test_translator() {
        let t = Translator::new(Language::Es);
        assert_eq!(t.language(), Language::Es);
        assert_eq!(t.t(TextKey::Cancel), "Cancelar");
    }
}

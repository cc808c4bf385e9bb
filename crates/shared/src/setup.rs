use serde::{Deserialize, Serialize};

/// 3D-вектор в документе
pub type Vector3 = [f64; 3];

/// Цвет RGB (компоненты 0..1)
pub type ColorRgb = [f64; 3];

/// Перечисление, которое отображается на свойство с вариантами (option)
pub trait OptionEnum: Sized + Copy + PartialEq + 'static {
    /// Подписи вариантов в порядке индексов
    const OPTIONS: &'static [&'static str];
    /// Все значения в порядке индексов
    const ALL: &'static [Self];

    /// Индекс варианта
    fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Вариант по индексу
    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Запись setup — состояние всех фич одной сцены
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Setup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<InterfaceData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reader: Option<ReaderData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<ViewerData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<NavigationData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<FloorData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<GridData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tape: Option<TapeData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slicer: Option<SlicerData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tours: Option<ToursData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshots: Option<SnapshotsData>,
}

impl Setup {
    /// true, если ни одна фича не записала данные
    pub fn is_empty(&self) -> bool {
        *self == Setup::default()
    }
}

// ── Interface ───────────────────────────────────────────────

/// Видимость элементов интерфейса
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceData {
    pub visible: bool,
    pub logo: bool,
    pub menu: bool,
    pub tools: bool,
}

// ── Reader ──────────────────────────────────────────────────

/// Положение панели чтения статей
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ReaderPosition {
    #[default]
    Overlay,
    Left,
    Right,
}

impl OptionEnum for ReaderPosition {
    const OPTIONS: &'static [&'static str] = &["Overlay", "Left", "Right"];
    const ALL: &'static [Self] = &[Self::Overlay, Self::Left, Self::Right];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderData {
    pub enabled: bool,
    pub position: ReaderPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub article_id: Option<String>,
}

// ── Viewer ──────────────────────────────────────────────────

/// Режим шейдера модели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ShaderMode {
    #[default]
    Default,
    Clay,
    Normals,
    Wireframe,
    #[serde(rename = "X-Ray")]
    XRay,
}

impl OptionEnum for ShaderMode {
    const OPTIONS: &'static [&'static str] = &["Default", "Clay", "Normals", "Wireframe", "X-Ray"];
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Clay,
        Self::Normals,
        Self::Wireframe,
        Self::XRay,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerData {
    pub shader: ShaderMode,
    pub exposure: f64,
    pub gamma: f64,
    pub annotations_visible: bool,
}

// ── Navigation ──────────────────────────────────────────────

/// Тип навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum NavigationType {
    #[default]
    Orbit,
}

impl OptionEnum for NavigationType {
    const OPTIONS: &'static [&'static str] = &["Orbit"];
    const ALL: &'static [Self] = &[Self::Orbit];
}

/// Орбита камеры и её пределы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitData {
    pub orbit: Vector3,
    pub offset: Vector3,
    pub min_orbit: Vector3,
    pub max_orbit: Vector3,
    pub min_offset: Vector3,
    pub max_offset: Vector3,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationData {
    #[serde(rename = "type")]
    pub nav_type: NavigationType,
    pub enabled: bool,
    pub auto_zoom: bool,
    pub lights_follow_camera: bool,
    pub auto_rotation: bool,
    pub orbit: OrbitData,
}

// ── Background ──────────────────────────────────────────────

/// Стиль фона
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BackgroundStyle {
    Solid,
    LinearGradient,
    #[default]
    RadialGradient,
}

impl OptionEnum for BackgroundStyle {
    const OPTIONS: &'static [&'static str] = &["Solid", "LinearGradient", "RadialGradient"];
    const ALL: &'static [Self] = &[Self::Solid, Self::LinearGradient, Self::RadialGradient];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundData {
    pub style: BackgroundStyle,
    pub color0: ColorRgb,
    pub color1: ColorRgb,
}

// ── Floor / Grid ────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorData {
    pub visible: bool,
    pub position: Vector3,
    pub size: f64,
    pub color: ColorRgb,
    pub opacity: f64,
    pub receive_shadow: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridData {
    pub visible: bool,
    pub color: ColorRgb,
    pub lines: f64,
}

// ── Tape ────────────────────────────────────────────────────

/// Измерительная лента: две точки с направлениями
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TapeData {
    pub enabled: bool,
    pub start_position: Vector3,
    pub start_direction: Vector3,
    pub end_position: Vector3,
    pub end_direction: Vector3,
}

// ── Slicer ──────────────────────────────────────────────────

/// Ось плоскости сечения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SliceAxis {
    #[default]
    X,
    Y,
    Z,
}

impl OptionEnum for SliceAxis {
    const OPTIONS: &'static [&'static str] = &["X", "Y", "Z"];
    const ALL: &'static [Self] = &[Self::X, Self::Y, Self::Z];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlicerData {
    pub enabled: bool,
    pub axis: SliceAxis,
    pub inverted: bool,
    pub position: f64,
    pub color: ColorRgb,
}

// ── Tours ───────────────────────────────────────────────────

/// Шаг тура — ссылка на состояние снимка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourStep {
    /// ID состояния в snapshots
    pub id: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourData {
    pub title: String,
    #[serde(default)]
    pub lead: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    pub steps: Vec<TourStep>,
}

/// Все туры сцены
pub type ToursData = Vec<TourData>;

// ── Snapshots ───────────────────────────────────────────────

/// Кривая интерполяции между состояниями
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EasingCurve {
    #[default]
    Linear,
    EaseQuad,
    EaseInQuad,
    EaseOutQuad,
    EaseCubic,
    EaseInCubic,
    EaseOutCubic,
}

/// Сохранённое состояние: значения всех целевых свойств
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotState {
    pub id: String,
    #[serde(default)]
    pub curve: EasingCurve,
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub threshold: f64,
    /// Значения в порядке `SnapshotsData::targets`
    pub values: Vec<serde_json::Value>,
}

/// Снимки состояния. Цели — пути вида `scenes/0/setup/navigation/Enabled`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SnapshotsData {
    #[serde(default)]
    pub features: Vec<String>,
    pub targets: Vec<String>,
    pub states: Vec<SnapshotState>,
}

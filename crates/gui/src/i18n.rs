use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ru,
    En,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=Ru (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::En,
        _ => Lang::Ru,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::Ru => 0,
            Lang::En => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let ru = lang() == Lang::Ru;
    match key {
        // ── Main menus ──────────────────────────────────────
        "menu.file" => if ru { "Файл" } else { "File" },
        "menu.new" => if ru { "Новый документ" } else { "New document" },
        "menu.open" => if ru { "Открыть документ..." } else { "Open Document..." },
        "menu.open_title" => if ru { "Открыть документ" } else { "Open Document" },
        "menu.save" => if ru { "Сохранить" } else { "Save" },
        "menu.save_as" => if ru { "Сохранить как..." } else { "Save As..." },
        "menu.save_title" => if ru { "Сохранить документ" } else { "Save Document" },
        "menu.load_model" => if ru { "Загрузить модель..." } else { "Load Model..." },
        "menu.load_model_title" => if ru { "Загрузить модель glTF" } else { "Load glTF Model" },
        "menu.quit" => if ru { "Выход" } else { "Quit" },

        "menu.view" => if ru { "Вид" } else { "View" },
        "menu.tour_features" => if ru { "Фичи тура" } else { "Tour features" },
        "menu.slice_tool" => if ru { "Сечение" } else { "Slice tool" },
        "menu.model_tree" => if ru { "Дерево модели" } else { "Model tree" },
        "menu.language" => if ru { "Язык" } else { "Language" },
        "menu.settings" => if ru { "Настройки..." } else { "Settings..." },

        // ── Tour features ───────────────────────────────────
        "tours.heading" => if ru { "Фичи тура" } else { "Tour features" },
        "tours.hint" => if ru { "Свойства отмеченных фич анимируются турами" } else { "Properties of checked features are animated by tours" },
        "tours.targets" => if ru { "Целевых свойств" } else { "Target properties" },

        // ── Slice tool ──────────────────────────────────────
        "slice.axis" => if ru { "Ось" } else { "Axis" },
        "slice.position" => if ru { "Позиция" } else { "Position" },
        "slice.inverted" => if ru { "Инвертировать" } else { "Inverted" },

        // ── Model tree ──────────────────────────────────────
        "models.heading" => if ru { "Модели" } else { "Models" },
        "models.empty" => if ru { "Нет загруженных моделей" } else { "No models loaded" },
        "models.loading" => if ru { "Загрузка..." } else { "Loading..." },
        "models.primitives" => if ru { "примитивов" } else { "primitives" },
        "models.unnamed" => if ru { "(без имени)" } else { "(unnamed)" },

        // ── Status bar ──────────────────────────────────────
        "status.ready" => if ru { "Готово" } else { "Ready" },
        "status.scene" => if ru { "Сцена" } else { "Scene" },
        "status.untitled" => if ru { "Без имени" } else { "Untitled" },
        "status.models" => if ru { "Моделей" } else { "Models" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if ru { "Настройки" } else { "Settings" },
        "settings.ui" => if ru { "Интерфейс" } else { "Interface" },
        "settings.font_size" => if ru { "Размер шрифта" } else { "Font size" },
        "settings.loader" => if ru { "Загрузка моделей" } else { "Model loading" },
        "settings.center_geometry" => if ru { "Центрировать геометрию" } else { "Center geometry" },
        "settings.tours" => if ru { "Фичи тура по умолчанию" } else { "Default tour features" },
        "settings.reset" => if ru { "Сбросить" } else { "Reset" },
        "settings.close" => if ru { "Закрыть" } else { "Close" },

        // ── Fallback ────────────────────────────────────────
        _ => "???",
    }
}

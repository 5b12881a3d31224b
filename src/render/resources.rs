// ============================================
// Resources - Упакованные ресурсы
// ============================================
// Шейдеры вшиваются в бинарник и достаются по имени.

static RESOURCES: &[(&str, &str)] = &[
    ("shaders.default.vert", include_str!("../../shaders/default.vert")),
    ("shaders.default.frag", include_str!("../../shaders/default.frag")),
];

/// Прочитать ресурс по имени. Отсутствующий ресурс — фатальная ошибка,
/// запасных шейдеров нет.
pub fn read_resource(name: &str) -> &'static str {
    RESOURCES
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, text)| *text)
        .unwrap_or_else(|| panic!("Resource not found: '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaged_shaders_present() {
        assert!(!read_resource("shaders.default.vert").is_empty());
        assert!(!read_resource("shaders.default.frag").is_empty());
    }

    #[test]
    #[should_panic(expected = "Resource not found: 'shaders.missing.vert'")]
    fn test_missing_resource_panics() {
        read_resource("shaders.missing.vert");
    }
}

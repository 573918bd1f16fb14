use pulse_core::cache::DatasetCache;
use pulse_core::config::DashboardConfig;
use std::path::Path;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_sources(dir: &Path) {
    std::fs::create_dir_all(dir).unwrap();
    let write = |name: &str, body: &str| std::fs::write(dir.join(name), body).unwrap();

    write("clients.csv", "ID клиента,ФИО,Пол,Возраст\n1,Иванов Иван,М,25\n");
    write("sales.csv", "ID тренера,ID клиента,Тип продукта,Сумма\n1,1,Абонемент,5000\n");
    write("visits.csv", "ID клиента,Дата и время\n1,05.03.2024 18:45\n");
    write(
        "subscriptions.csv",
        "ID клиента,Дата начала,Количество заморозок\n1,01.01.2024,2\n",
    );
    write("complaints.csv", "ID клиента,Дата\n1,03.03.2024\n");
    write(
        "staff_movements.csv",
        "ID сотрудника,Дата приема,Дата увольнения\n10,01.02.2023,\n",
    );
    write("trainers.csv", "ID тренера,ФИО\n1,Кузнецов Олег\n");
}

fn make_config(dir: &Path) -> DashboardConfig {
    let mut config = DashboardConfig::default_test();
    config.data_dir = dir.display().to_string();
    config
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Repeated get_or_load() calls reuse the same snapshot — the files are
/// read once per generation.
#[test]
fn snapshot_is_reused_until_invalidated() {
    let dir = std::env::temp_dir().join("pulse-cache-reuse-test");
    write_sources(&dir);
    let config = make_config(&dir);

    let cache = DatasetCache::new();
    let first = cache.get_or_load(&config).unwrap();
    let second = cache.get_or_load(&config).unwrap();

    assert_eq!(first.snapshot_id, second.snapshot_id);

    std::fs::remove_dir_all(&dir).unwrap();
}

/// invalidate() drops the generation; the next load is a fresh snapshot.
#[test]
fn invalidate_forces_a_fresh_snapshot() {
    let dir = std::env::temp_dir().join("pulse-cache-invalidate-test");
    write_sources(&dir);
    let config = make_config(&dir);

    let cache = DatasetCache::new();
    let first = cache.get_or_load(&config).unwrap();
    cache.invalidate();
    let second = cache.get_or_load(&config).unwrap();

    assert_ne!(first.snapshot_id, second.snapshot_id);
    assert_eq!(second.dataset.clients.len(), 1);

    std::fs::remove_dir_all(&dir).unwrap();
}

/// reload() picks up changed source files in one step.
#[test]
fn reload_sees_new_rows() {
    let dir = std::env::temp_dir().join("pulse-cache-reload-test");
    write_sources(&dir);
    let config = make_config(&dir);

    let cache = DatasetCache::new();
    let first = cache.get_or_load(&config).unwrap();
    assert_eq!(first.dataset.clients.len(), 1);

    std::fs::write(
        dir.join("clients.csv"),
        "ID клиента,ФИО,Пол,Возраст\n1,Иванов Иван,М,25\n2,Петрова Анна,Ж,34\n",
    )
    .unwrap();

    let second = cache.reload(&config).unwrap();
    assert_eq!(second.dataset.clients.len(), 2);

    std::fs::remove_dir_all(&dir).unwrap();
}

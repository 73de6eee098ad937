use lifedeck_core::{keys, HealthService, KvStore, MemoryKvStore, MAX_HISTORY_ENTRIES};

#[test]
fn inputs_seed_field_defaults_on_first_use() {
    let kv = MemoryKvStore::new();
    let service = HealthService::new(&kv);

    let inputs = service.inputs().unwrap();
    assert_eq!(inputs.sleep_hours, 7.5);
    assert_eq!(inputs.water_ml, 1500);
    assert_eq!(inputs.mood_level, 3);
    assert_eq!(inputs.steps, 5000);
}

#[test]
fn setters_clamp_and_write_through() {
    let kv = MemoryKvStore::new();
    let service = HealthService::new(&kv);

    service.set_sleep_hours(14.0).unwrap();
    service.set_water_ml(9999).unwrap();
    service.set_mood_level(0).unwrap();
    service.set_steps(16_000).unwrap();

    assert_eq!(kv.get(keys::HEALTH_SLEEP).unwrap().as_deref(), Some("12"));
    assert_eq!(kv.get(keys::HEALTH_WATER).unwrap().as_deref(), Some("4000"));
    assert_eq!(kv.get(keys::HEALTH_MOOD).unwrap().as_deref(), Some("1"));
    assert_eq!(kv.get(keys::HEALTH_STEPS).unwrap().as_deref(), Some("15000"));

    let inputs = service.inputs().unwrap();
    assert_eq!(inputs.sleep_hours, 12.0);
    assert_eq!(inputs.water_ml, 4000);
}

#[test]
fn wellness_reads_current_persisted_inputs() {
    let kv = MemoryKvStore::new();
    let service = HealthService::new(&kv);

    // Seed inputs: 7.5/8*0.3 + 1500/2500*0.3 + 3/5*0.4 = 0.70125
    assert!((service.wellness().unwrap() - 70.125).abs() < 1e-9);

    service.set_mood_level(5).unwrap();
    assert!((service.wellness().unwrap() - 86.125).abs() < 1e-9);
}

#[test]
fn log_day_appends_and_persists_history() {
    let kv = MemoryKvStore::new();
    let service = HealthService::new(&kv);

    assert!(service.history().unwrap().is_empty());

    let history = service.log_day().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].score, 70);

    // Write-through: a fresh service over the same storage sees the entry.
    let reread = HealthService::new(&kv).history().unwrap();
    assert_eq!(reread, history);
}

#[test]
fn history_window_is_bounded_with_fifo_eviction() {
    let kv = MemoryKvStore::new();
    let service = HealthService::new(&kv);

    // First logged day stands out via a distinct mood.
    service.set_mood_level(5).unwrap();
    service.log_day().unwrap();
    service.set_mood_level(1).unwrap();

    let mut history = Vec::new();
    for _ in 0..7 {
        history = service.log_day().unwrap();
    }

    assert_eq!(history.len(), MAX_HISTORY_ENTRIES);
    // The first call's high score was evicted; only low-mood scores remain.
    assert!(history.iter().all(|entry| entry.score == 54));
}

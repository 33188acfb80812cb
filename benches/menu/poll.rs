use criterion::{BatchSize, Criterion, Throughput};
use lcdmenu::catalog::{Catalog, Id, InputDefinition, MenuHeader, MenuItem, Value};
use lcdmenu::platform::{Clock, DisplayAction, DisplayDevice, NavAction, Navigator, ValueRequest};
use lcdmenu::{Menu, Options};
use std::hint::black_box;

static MENUS: [MenuHeader; 2] = [
    MenuHeader::new(1, "Main Menu", 10, 19),
    MenuHeader::new(2, "Signal", 20, 21),
];

static ITEMS: [MenuItem; 8] = [
    MenuItem::menu(10, "Signal", 2),
    MenuItem::edit(11, "Mode", 31),
    MenuItem::edit(13, "Enable", 32),
    MenuItem::edit(15, "Offset", 33),
    MenuItem::edit(17, "Gain", 34),
    MenuItem::edit(19, "Reset", 35),
    MenuItem::edit_live(20, "Frequency", 30),
    MenuItem::edit_live(21, "Level", 33),
];

static INPUTS: [InputDefinition; 6] = [
    InputDefinition::engineering(
        30,
        "Freq",
        7,
        Value::with_power(1000, -3),
        Value::with_power(999999, 9),
        1,
        "Hz",
    ),
    InputDefinition::list(31, "Mode", 5, "Sine|Square|Saw"),
    InputDefinition::boolean(32, "On"),
    InputDefinition::integer(33, "Off", 5, Value::new(-5000), Value::new(5000), 10),
    InputDefinition::fixed_point(34, "Gain", 7, Value::new(0), Value::new(100000), 5),
    InputDefinition::run(35, "Confirm"),
];

/// Endless input source with no-op output.
struct Bench {
    keys: &'static [NavAction],
    next: usize,
    value: Value,
}

impl Navigator for Bench {
    fn navigate(&mut self, _inc_delta: &mut u16) -> NavAction {
        if self.keys.is_empty() {
            return NavAction::Null;
        }
        let key = self.keys[self.next % self.keys.len()];
        self.next += 1;
        key
    }
}

impl DisplayDevice for Bench {
    fn display(&mut self, action: DisplayAction, message: Option<&str>) -> bool {
        black_box((action, message));
        true
    }
}

impl ValueRequest for Bench {
    fn get(&mut self, _id: Id) -> Option<Value> {
        Some(self.value)
    }

    fn set(&mut self, _id: Id, value: &Value) {
        self.value = *value;
    }
}

impl Clock for Bench {
    fn millis(&self) -> u32 {
        0
    }
}

fn setup(keys: &'static [NavAction], value: Value, wrap: bool) -> Menu<'static, Bench> {
    let platform = Bench {
        keys,
        next: 0,
        value,
    };
    let mut menu = Menu::new(Catalog::new(&MENUS, &ITEMS, &INPUTS), platform);
    menu.set_options(Options {
        wrap,
        auto_start: false,
        timeout_ms: 60_000,
    });
    menu
}

pub fn bench_idle_poll(c: &mut Criterion) {
    let mut menu = setup(&[], Value::default(), false);
    c.bench_function("idle_poll", |b| b.iter(|| black_box(menu.poll(false))));
}

pub fn bench_browse(c: &mut Criterion) {
    let mut group = c.benchmark_group("browse");
    group.throughput(Throughput::Elements(1));
    let mut menu = setup(&[NavAction::Increment], Value::default(), true);
    menu.poll(true);
    group.bench_function("increment_wrapping", |b| b.iter(|| black_box(menu.poll(false))));
    group.finish();
}

pub fn bench_edit_integer(c: &mut Criterion) {
    static KEYS: [NavAction; 4] = [
        NavAction::Increment,
        NavAction::Increment,
        NavAction::Decrement,
        NavAction::Increment,
    ];
    let mut group = c.benchmark_group("edit");
    group.throughput(Throughput::Elements(1));
    group.bench_function("integer_step", |b| {
        b.iter_batched_ref(
            || {
                let mut menu = setup(&KEYS, Value::new(0), false);
                menu.poll(true);
                // Signal, Level
                menu.platform_mut().keys = &[NavAction::Select, NavAction::Increment, NavAction::Select];
                for _ in 0..3 {
                    menu.poll(false);
                }
                menu.platform_mut().keys = &KEYS;
                menu.platform_mut().next = 0;
                menu
            },
            |menu| black_box(menu.poll(false)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

pub fn bench_edit_engineering(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit");
    group.throughput(Throughput::Elements(1));
    let mut menu = setup(&[NavAction::Select], Value::with_power(999999, 3), false);
    menu.poll(true);
    // Signal, then Frequency
    menu.poll(false);
    menu.poll(false);
    menu.platform_mut().keys = &[NavAction::Increment, NavAction::Decrement];
    menu.platform_mut().next = 0;
    group.bench_function("engineering_band_change", |b| {
        b.iter(|| black_box(menu.poll(false)))
    });
    group.finish();
}

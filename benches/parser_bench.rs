use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mysql_parser_slowlog::constants::ENTRY_DELIMITER;
use mysql_parser_slowlog::{BlockScanner, parse_block, read_slowlog_from};

const ENTRY_BLOCK: &str = "240101 09:15:30\n\
# User@Host: app[app] @ web01 []\n\
# Query_time: 0.734  Lock_time: 0.002  Rows_sent: 120  Rows_examined: 48213\n\
use orders;\n\
SET timestamp=1704100530;\n\
SELECT o.id, o.total FROM orders o JOIN items i ON i.order_id = o.id WHERE o.status = 'open'";

/// 构造包含 n 条条目的合成日志内容
fn synthetic_log(entries: usize) -> String {
    let mut log = String::with_capacity(entries * (ENTRY_BLOCK.len() + 16));
    log.push_str(ENTRY_BLOCK);
    for _ in 1..entries {
        log.push_str(";\n# Time: ");
        log.push_str(ENTRY_BLOCK);
    }
    log.push_str(";\n");
    log
}

/// Benchmark 扫描器切分
fn bench_scanner(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanner");

    for entries in [100, 1000] {
        let log = synthetic_log(entries);
        group.bench_with_input(BenchmarkId::new("split", entries), &log, |b, log| {
            b.iter(|| {
                BlockScanner::new(black_box(log.as_bytes()), &ENTRY_DELIMITER)
                    .map(|r| r.unwrap().len())
                    .sum::<usize>()
            })
        });
    }

    group.finish();
}

/// Benchmark 单块解析
fn bench_parse_block(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_block");

    group.bench_function("retain_sql", |b| {
        b.iter(|| parse_block(black_box(ENTRY_BLOCK), true))
    });

    group.bench_function("discard_sql", |b| {
        b.iter(|| parse_block(black_box(ENTRY_BLOCK), false))
    });

    group.finish();
}

/// Benchmark 端到端读取
fn bench_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_slowlog_from");

    for entries in [100, 1000] {
        let log = synthetic_log(entries);
        group.bench_with_input(BenchmarkId::new("entries", entries), &log, |b, log| {
            b.iter(|| read_slowlog_from(black_box(log.as_bytes()), true).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanner, bench_parse_block, bench_read);
criterion_main!(benches);

use chrono::{NaiveDate, NaiveDateTime};

/// 从块首解析时间戳头。
///
/// 头部格式为两位年、两位月、两位日、至少一个空白、1-2 位小时、
/// 两位分、两位秒、换行符：`YYMMDD HH:MM:SS\n`。年份按 `2000 + YY` 解释。
///
/// 匹配成功时返回时间戳和头部（含换行符）之后的字节偏移量；
/// 不匹配或日期/时间在日历上非法时返回 `None`，调用方应跳过该块
/// （这类块是服务器重启通告等非查询记录）。
pub(crate) fn parse_entry_header(block: &str) -> Option<(NaiveDateTime, usize)> {
    let b = block.as_bytes();

    // 日期部分：恰好 6 位数字
    if b.len() < 6 || !b[..6].iter().all(u8::is_ascii_digit) {
        return None;
    }
    let year = 2000 + two_digits(b, 0) as i32;
    let month = two_digits(b, 2);
    let day = two_digits(b, 4);

    // 日期与时间之间至少一个空白（单位数小时前常见两个空格）
    let mut i = 6;
    while b.get(i).is_some_and(|&c| c == b' ' || c == b'\t') {
        i += 1;
    }
    if i == 6 {
        return None;
    }

    // 1-2 位小时
    let hour_start = i;
    while b.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let hour = match i - hour_start {
        1 => (b[hour_start] - b'0') as u32,
        2 => two_digits(b, hour_start),
        _ => return None,
    };

    if b.get(i) != Some(&b':') {
        return None;
    }
    i += 1;
    let minute = checked_two_digits(b, i)?;
    i += 2;

    if b.get(i) != Some(&b':') {
        return None;
    }
    i += 1;
    let second = checked_two_digits(b, i)?;
    i += 2;

    if b.get(i) != Some(&b'\n') {
        return None;
    }
    i += 1;

    let ts = NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(hour, minute, second)?;
    Some((ts, i))
}

/// 判断一行是否为 `use <db>;` 会话上下文语句（大小写不敏感）
pub(crate) fn is_use_line(line: &str) -> bool {
    match strip_prefix_ignore_case(line, "use ") {
        Some(rest) => rest.len() > 1 && rest.ends_with(';'),
        None => false,
    }
}

/// 判断一行是否为 `SET timestamp=<digits>;` 会话上下文语句（大小写不敏感）
pub(crate) fn is_set_timestamp_line(line: &str) -> bool {
    let rest = match strip_prefix_ignore_case(line, "SET timestamp=") {
        Some(rest) => rest,
        None => return false,
    };
    match rest.strip_suffix(';') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[inline]
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match s.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => Some(&s[prefix.len()..]),
        _ => None,
    }
}

/// 调用方保证 pos、pos + 1 处为数字
#[inline]
fn two_digits(b: &[u8], pos: usize) -> u32 {
    (b[pos] - b'0') as u32 * 10 + (b[pos + 1] - b'0') as u32
}

#[inline]
fn checked_two_digits(b: &[u8], pos: usize) -> Option<u32> {
    let hi = *b.get(pos)?;
    let lo = *b.get(pos + 1)?;
    if hi.is_ascii_digit() && lo.is_ascii_digit() {
        Some((hi - b'0') as u32 * 10 + (lo - b'0') as u32)
    } else {
        None
    }
}

/// Hachi64 alphabet: 64 Chinese characters, one per 6-bit value.
///
/// Position `i` is the canonical encoding of the value `i`. Unlike a
/// base64 alphabet this is not ASCII; each character occupies three bytes
/// in UTF-8, so byte-indexed tables do not apply.
pub const ALPHABET: &str = "哈蛤呵吉急集米咪迷南男难北背杯绿律虑豆斗抖啊阿额西希息嘎咖伽花华哗压鸭呀库酷苦奶乃耐龙隆拢曼慢漫波播玻叮丁订咚东冬囊路陆多都弥济";

/// Padding character.
pub const PAD: char = '=';

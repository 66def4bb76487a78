// ==========================================
// 神秘圣诞老人 - 用户提示文本 (i18n)
// ==========================================
// 语言: en（默认）/ zh-CN，文本位于 locales/*.yml
// 占位符: %{name}
// rust_i18n::i18n! 宏在 lib.rs 中初始化
// ==========================================

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use secret_santa::i18n::t_with_args;
/// let msg = t_with_args("assign.impossible", &[("name", "Alice")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

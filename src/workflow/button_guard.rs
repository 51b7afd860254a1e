//! 触发按钮的准入控制
//!
//! 每个动作的按钮在自己的请求在途期间置灰，这是唯一的防重入手段。
//! 无论动作成功还是失败，按钮文案与可用状态都必须恢复——
//! 恢复逻辑放在守卫的 Drop 里，任何退出路径都会执行。
//! 没有超时与取消：请求永不完成则按钮永久置灰，这是已接受的
//! 限制，重实现时应补显式的超时 / 取消控制。

/// 动作触发按钮
#[derive(Debug, Clone)]
pub struct ActionButton {
    label: String,
    busy_label: String,
    enabled: bool,
}

impl ActionButton {
    /// 创建按钮
    ///
    /// # 参数
    /// - `label`: 常态文案
    /// - `busy_label`: 请求在途时的文案
    pub fn new(label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: busy_label.into(),
            enabled: true,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// 占用按钮：置灰并切换到在途文案
    ///
    /// 返回的守卫在离开作用域时恢复原始文案与可用状态
    pub fn engage(&mut self) -> ButtonGuard<'_> {
        let original_label = std::mem::replace(&mut self.label, self.busy_label.clone());
        self.enabled = false;
        ButtonGuard {
            button: self,
            original_label,
        }
    }
}

/// 按钮占用守卫
pub struct ButtonGuard<'a> {
    button: &'a mut ActionButton,
    original_label: String,
}

impl Drop for ButtonGuard<'_> {
    fn drop(&mut self) {
        self.button.label = std::mem::take(&mut self.original_label);
        self.button.enabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engage_disables_and_swaps_label() {
        let mut button = ActionButton::new("Generate", "Working...");
        {
            let _guard = button.engage();
        }
        // 守卫释放后恢复
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Generate");
    }

    /// 提前返回（失败路径）同样恢复按钮状态
    #[test]
    fn test_guard_restores_on_early_return() {
        fn failing_action(button: &mut ActionButton) -> Result<(), &'static str> {
            let _guard = button.engage();
            Err("boom")
        }

        let mut button = ActionButton::new("Export", "Exporting...");
        assert!(failing_action(&mut button).is_err());
        assert!(button.is_enabled());
        assert_eq!(button.label(), "Export");
    }

    /// 遗忘守卫时按钮保持在途状态（对应请求永不完成的已知限制）
    #[test]
    fn test_forgotten_guard_leaves_button_disabled() {
        let mut button = ActionButton::new("Export", "Exporting...");
        std::mem::forget(button.engage());
        assert!(!button.is_enabled());
        assert_eq!(button.label(), "Exporting...");
    }
}
